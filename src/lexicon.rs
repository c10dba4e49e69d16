//! Built-in English language resource.
//!
//! Closed-class tables, open-class lexicons, morphology exceptions and the
//! sentiment lexicon. Loaded once, optionally extended with a JSON overlay,
//! then shared read-only behind an `Arc`.

use std::collections::HashMap;
use std::path::Path;

use rustc_hash::{FxHashMap, FxHashSet};
use serde::Deserialize;
use tracing::info;

use crate::error::{EngineError, Result};
use crate::types::PosTag;

// ---------------------------------------------------------------------------
// Closed classes
// ---------------------------------------------------------------------------

const DETERMINERS: &[&str] = &[
    "the", "a", "an", "this", "that", "these", "those", "each", "every", "either", "neither",
    "some", "any", "no", "all", "both", "few", "many", "much", "several", "such", "another",
    "other", "whatever", "whichever", "what", "which", "most", "more", "less", "least",
    "enough", "fewer",
];

const POSSESSIVES: &[&str] = &["my", "your", "his", "her", "its", "our", "their", "whose"];

const PRONOUNS: &[&str] = &[
    "i", "me", "you", "he", "him", "she", "it", "we", "us", "they", "them", "myself",
    "yourself", "himself", "herself", "itself", "ourselves", "yourselves", "themselves", "mine",
    "yours", "hers", "ours", "theirs", "who", "whom", "someone", "somebody", "something",
    "anyone", "anybody", "anything", "everyone", "everybody", "everything", "nobody", "nothing",
    "none", "there", "one",
];

const AUXILIARIES: &[(&str, &str)] = &[
    ("be", "be"),
    ("am", "be"),
    ("is", "be"),
    ("are", "be"),
    ("was", "be"),
    ("were", "be"),
    ("been", "be"),
    ("being", "be"),
    ("have", "have"),
    ("has", "have"),
    ("had", "have"),
    ("having", "have"),
    ("do", "do"),
    ("does", "do"),
    ("did", "do"),
    ("will", "will"),
    ("would", "would"),
    ("shall", "shall"),
    ("should", "should"),
    ("can", "can"),
    ("could", "could"),
    ("may", "may"),
    ("might", "might"),
    ("must", "must"),
    ("ought", "ought"),
];

/// Negated auxiliaries map to the auxiliary they contract.
const NEGATED_AUXILIARIES: &[(&str, &str)] = &[
    ("isn't", "be"),
    ("aren't", "be"),
    ("wasn't", "be"),
    ("weren't", "be"),
    ("don't", "do"),
    ("doesn't", "do"),
    ("didn't", "do"),
    ("haven't", "have"),
    ("hasn't", "have"),
    ("hadn't", "have"),
    ("won't", "will"),
    ("wouldn't", "would"),
    ("can't", "can"),
    ("cannot", "can"),
    ("couldn't", "could"),
    ("shouldn't", "should"),
    ("mustn't", "must"),
    ("mightn't", "might"),
    ("shan't", "shall"),
    ("ain't", "be"),
];

const PARTICLES: &[&str] = &["to", "not"];

const ADPOSITIONS: &[&str] = &[
    "of", "in", "on", "at", "by", "for", "with", "about", "against", "between", "into",
    "through", "during", "before", "after", "above", "below", "from", "up", "down", "out",
    "off", "over", "under", "across", "along", "among", "around", "behind", "beneath",
    "beside", "besides", "beyond", "despite", "except", "inside", "near", "onto", "outside",
    "past", "per", "since", "than", "toward", "towards", "upon", "via", "within", "without",
    "throughout", "like", "unlike", "amid", "amidst", "as", "until", "till", "regarding",
    "concerning", "including", "following", "versus",
];

const COORDINATORS: &[&str] = &["and", "or", "but", "nor"];

const SUBORDINATORS: &[&str] = &[
    "because", "although", "though", "while", "whereas", "if", "unless", "whether", "when",
    "where", "why", "how", "lest", "whenever", "wherever", "whilst",
];

/// Adverbs that morphology alone would not find.
const ADVERBS: &[&str] = &[
    "also", "just", "still", "even", "here", "now", "then", "soon", "often", "always", "never",
    "ever", "already", "yet", "again", "almost", "quite", "rather", "very", "too", "so", "well",
    "away", "back", "together", "perhaps", "maybe", "indeed", "instead", "however", "thus",
    "therefore", "hence", "meanwhile", "moreover", "furthermore", "otherwise", "nevertheless",
    "nonetheless", "anyway", "somewhat", "sometimes", "seldom", "later", "tomorrow", "today",
    "yesterday", "tonight", "twice", "ago", "abroad", "alone", "anymore", "anywhere",
    "everywhere", "nowhere", "somewhere", "elsewhere", "forever", "else", "further", "farther",
    "once", "only", "super", "regardless", "afterwards", "overseas", "upstairs", "downstairs",
    "online", "ahead", "aside", "apart", "altogether", "likewise",
];

const INTERJECTIONS: &[&str] = &[
    "oh", "wow", "hey", "ah", "ouch", "yes", "yeah", "ok", "okay", "alas", "hooray", "oops",
    "whoa", "hmm", "ugh", "yay", "huh", "bravo",
];

const NEGATIONS: &[&str] = &["not", "never", "no", "neither", "nor", "cannot"];

// ---------------------------------------------------------------------------
// Open classes
// ---------------------------------------------------------------------------

/// Degree adverbs and their sentiment multipliers.
const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.3),
    ("extremely", 1.5),
    ("absolutely", 1.5),
    ("totally", 1.4),
    ("completely", 1.4),
    ("utterly", 1.5),
    ("incredibly", 1.5),
    ("truly", 1.3),
    ("highly", 1.3),
    ("deeply", 1.3),
    ("hugely", 1.4),
    ("massively", 1.4),
    ("insanely", 1.5),
    ("remarkably", 1.3),
    ("exceptionally", 1.4),
    ("extraordinarily", 1.5),
    ("tremendously", 1.5),
    ("enormously", 1.4),
    ("immensely", 1.4),
    ("terribly", 1.4),
    ("awfully", 1.3),
    ("seriously", 1.2),
    ("literally", 1.2),
    ("entirely", 1.3),
    ("thoroughly", 1.3),
    ("super", 1.3),
    ("unbelievably", 1.5),
    ("ridiculously", 1.4),
    ("outrageously", 1.5),
    ("wildly", 1.4),
    ("especially", 1.2),
    ("particularly", 1.2),
    ("exceedingly", 1.4),
    ("amazingly", 1.4),
    ("fantastically", 1.4),
    ("stunningly", 1.4),
    ("shockingly", 1.4),
    ("staggeringly", 1.4),
    ("quite", 1.1),
    ("fully", 1.2),
    ("purely", 1.1),
    ("simply", 1.1),
    ("downright", 1.4),
    ("mega", 1.4),
];

const ADJECTIVES: &[&str] = &[
    // Size, age, shape
    "big", "small", "large", "little", "long", "short", "high", "low", "young", "old", "new",
    "huge", "massive", "enormous", "tiny", "vast", "tall", "wide", "narrow", "deep", "shallow",
    "thick", "thin", "fat", "slim", "lean", "heavy", "immense", "colossal", "gigantic",
    "miniature", "ancient", "modern", "early", "late", "recent", "current", "fresh",
    // Colour, texture, temperature
    "brown", "red", "blue", "green", "yellow", "black", "white", "gray", "grey", "purple",
    "pink", "golden", "dark", "bright", "hot", "cold", "warm", "soft", "smooth", "rough",
    "sharp", "dull", "wet", "sleek", "shiny",
    // Speed and manner
    "quick", "fast", "slow", "lazy", "busy", "quiet", "loud", "noisy", "calm", "gentle",
    "wild", "fierce", "violent", "peaceful", "sudden", "rapid", "swift",
    // Evaluation, positive
    "good", "great", "nice", "fine", "beautiful", "lovely", "pretty", "gorgeous", "elegant",
    "stylish", "wonderful", "amazing", "incredible", "fantastic", "awesome", "brilliant",
    "excellent", "outstanding", "stunning", "remarkable", "extraordinary", "spectacular",
    "magnificent", "glorious", "marvelous", "marvellous", "superb", "perfect", "ideal",
    "fabulous", "terrific", "delightful", "charming", "adorable", "cute", "impressive",
    "phenomenal", "sensational", "magical", "miraculous", "flawless", "seamless", "stellar",
    "legendary", "epic", "iconic", "historic", "unprecedented", "revolutionary",
    "groundbreaking", "game-changing", "cutting-edge", "innovative", "disruptive",
    "breathtaking", "jaw-dropping", "mind-blowing", "heartwarming", "inspiring",
    "inspirational", "unbelievable", "unstoppable", "unparalleled", "unmatched", "unrivaled",
    "pivotal", "paramount", "tremendous", "monumental", "astonishing", "astounding",
    "staggering", "striking", "exciting", "thrilling", "fascinating", "intriguing",
    "interesting", "heroic", "brave", "courageous", "fearless", "bold", "noble", "proud",
    "happy", "glad", "pleased", "delighted", "thrilled", "excited", "hopeful", "optimistic",
    "lucky", "fortunate", "popular", "famous", "elite", "premium", "powerful", "mighty",
    "strong", "robust", "solid", "stable", "secure", "safe", "healthy", "tasty", "delicious",
    "sweet", "friendly", "polite", "honest", "fair", "true", "correct", "accurate",
    "precise", "exact", "valuable", "useful", "helpful", "effective", "efficient", "smart",
    "clever", "wise", "rich", "cheap", "affordable", "decent", "positive", "viral", "trendy",
    // Evaluation, negative
    "bad", "terrible", "horrible", "awful", "dreadful", "horrific", "horrendous", "atrocious",
    "appalling", "abysmal", "dismal", "lousy", "mediocre", "shocking", "devastating",
    "outrageous", "catastrophic", "disastrous", "dire", "grim", "bleak", "brutal", "savage",
    "vicious", "cruel", "evil", "wicked", "insane", "crazy", "ridiculous", "absurd", "stupid",
    "foolish", "dumb", "silly", "shameful", "disgraceful", "disgusting", "pathetic",
    "miserable", "painful", "bitter", "harsh", "severe", "tragic", "heartbreaking",
    "alarming", "terrifying", "scary", "frightening", "dangerous", "deadly", "lethal", "toxic",
    "chaotic", "stressful", "nervous", "anxious", "worried", "afraid", "fearful", "furious",
    "angry", "outraged", "sad", "unhappy", "unfortunate", "sorry", "pessimistic", "negative",
    "ugly", "hideous", "gross", "nasty", "vile", "rude", "corrupt", "dishonest", "guilty",
    "false", "wrong", "unfair", "useless", "worthless", "harmful", "risky", "unsafe", "sick",
    "ill", "dead", "weak", "poor", "expensive", "costly", "boring", "disappointing",
    "embarrassing", "humiliating", "infamous", "notorious", "weird", "strange", "odd",
    "bizarre", "unusual", "lonely", "dirty", "messy", "rotten",
    // Degree, importance, certainty
    "important", "significant", "crucial", "vital", "essential", "critical", "serious",
    "major", "minor", "main", "primary", "absolute", "sheer", "utter", "pure", "mere",
    "extreme", "excessive", "intense", "entire", "whole", "full", "certain", "sure",
    "obvious", "evident", "apparent", "likely", "unlikely", "possible", "impossible",
    "different", "similar", "same", "various", "common", "rare", "typical", "normal",
    "regular", "usual", "special", "simple", "easy", "hard", "difficult", "complex",
    "able", "unable", "real", "ultimate", "alive", "elderly", "responsible", "innocent",
    // Domain
    "political", "social", "economic", "financial", "national", "international", "local",
    "federal", "military", "medical", "legal", "global", "personal", "natural", "cultural",
    "digital", "environmental", "technical", "scientific", "historical", "traditional",
    "classic", "official",
];

const IRREGULAR_ADJECTIVES: &[(&str, &str)] = &[
    ("better", "good"),
    ("best", "good"),
    ("worse", "bad"),
    ("worst", "bad"),
    ("elder", "old"),
    ("eldest", "old"),
];

const VERBS: &[&str] = &[
    "say", "get", "make", "go", "know", "take", "see", "come", "think", "look", "want", "give",
    "use", "find", "tell", "ask", "work", "seem", "feel", "try", "leave", "call", "need",
    "become", "keep", "let", "begin", "help", "show", "hear", "play", "run", "move", "live",
    "believe", "hold", "bring", "happen", "write", "provide", "sit", "stand", "lose", "pay",
    "meet", "include", "continue", "set", "learn", "change", "lead", "understand", "watch",
    "follow", "stop", "create", "speak", "read", "allow", "add", "spend", "grow", "open",
    "walk", "win", "offer", "remember", "love", "consider", "appear", "buy", "wait", "serve",
    "die", "send", "expect", "build", "stay", "fall", "cut", "reach", "kill", "remain",
    "suggest", "raise", "pass", "sell", "require", "report", "decide", "pull", "announce",
    "launch", "release", "reveal", "claim", "warn", "jump", "fly", "drive", "eat", "drink",
    "sleep", "sing", "dance", "fight", "attack", "destroy", "save", "protect", "vote",
    "elect", "beat", "fail", "succeed", "rise", "drop", "increase", "decrease", "reduce",
    "improve", "develop", "design", "produce", "publish", "discover", "invent", "test",
    "measure", "study", "explain", "describe", "discuss", "argue", "agree", "disagree",
    "accept", "reject", "deny", "admit", "confirm", "approve", "sign", "close", "clean",
    "free", "clear", "cover", "face", "fix", "join", "hit", "hope", "list", "mark", "note",
    "plan", "post", "press", "push", "rate", "rule", "share", "start", "step", "support",
    "talk", "trade", "turn", "visit", "wish", "worry", "stun", "shock", "slam", "blast",
    "soar", "plunge", "surge", "skyrocket", "crash", "collapse", "explode", "spark",
    "trigger", "ignite", "fuel", "boost", "ban", "block", "charge", "arrest", "sue",
    "investigate", "accuse", "blame", "criticize", "praise", "celebrate", "mourn", "cry",
    "laugh", "smile", "scream", "shout", "yell", "whisper", "carry", "catch", "choose",
    "draw", "break", "forget", "forgive", "hide", "hurt", "lie", "lay", "ride", "ring",
    "shake", "shine", "shoot", "shut", "sink", "slide", "spread", "steal", "stick", "strike",
    "swim", "swing", "teach", "tear", "throw", "wake", "wear", "weep", "answer", "arrive",
    "belong", "borrow", "compare", "complain", "connect", "contain", "control", "cook",
    "copy", "count", "deliver", "depend", "enjoy", "enter", "exist", "fill", "finish",
    "handle", "hate", "identify", "imagine", "invest", "involve", "manage", "matter",
    "mention", "miss", "notice", "obtain", "order", "own", "paint", "pick", "place",
    "prefer", "prepare", "prevent", "promise", "prove", "receive", "recognize", "record",
    "refuse", "relax", "remove", "repeat", "replace", "respond", "return", "seek", "settle",
    "solve", "sound", "suffer", "suppose", "surprise", "threaten", "touch", "train",
    "travel", "treat", "trust", "wonder", "operate", "acquire", "merge", "expand", "hire",
    "employ", "ship", "deploy", "update", "upgrade", "outperform", "dominate", "transform",
    "disrupt", "redefine", "revolutionize", "unveil", "unleash", "smash", "crush", "ruin",
    "damage", "harm", "affect", "cause", "apply", "rely", "reply", "supply", "comply",
    "multiply", "imply", "deal", "mean", "seem", "bark", "shop", "cost", "estimate", "plan",
    "fund", "hold", "head", "hire", "invite", "monitor", "predict", "reach", "rebound",
    "recover", "resign", "retire", "review", "rise", "schedule", "score", "sign", "submit",
    "target", "warn", "witness", "close",
];

const IRREGULAR_VERBS: &[(&str, &str)] = &[
    ("said", "say"),
    ("got", "get"),
    ("gotten", "get"),
    ("made", "make"),
    ("went", "go"),
    ("gone", "go"),
    ("goes", "go"),
    ("knew", "know"),
    ("known", "know"),
    ("took", "take"),
    ("taken", "take"),
    ("saw", "see"),
    ("seen", "see"),
    ("came", "come"),
    ("thought", "think"),
    ("gave", "give"),
    ("given", "give"),
    ("found", "find"),
    ("told", "tell"),
    ("felt", "feel"),
    ("left", "leave"),
    ("kept", "keep"),
    ("began", "begin"),
    ("begun", "begin"),
    ("heard", "hear"),
    ("ran", "run"),
    ("held", "hold"),
    ("brought", "bring"),
    ("wrote", "write"),
    ("written", "write"),
    ("sat", "sit"),
    ("stood", "stand"),
    ("lost", "lose"),
    ("paid", "pay"),
    ("met", "meet"),
    ("led", "lead"),
    ("understood", "understand"),
    ("spoke", "speak"),
    ("spoken", "speak"),
    ("spent", "spend"),
    ("grew", "grow"),
    ("grown", "grow"),
    ("won", "win"),
    ("bought", "buy"),
    ("built", "build"),
    ("fell", "fall"),
    ("fallen", "fall"),
    ("sold", "sell"),
    ("sent", "send"),
    ("flew", "fly"),
    ("flown", "fly"),
    ("flies", "fly"),
    ("drove", "drive"),
    ("driven", "drive"),
    ("ate", "eat"),
    ("eaten", "eat"),
    ("drank", "drink"),
    ("drunk", "drink"),
    ("slept", "sleep"),
    ("sang", "sing"),
    ("sung", "sing"),
    ("fought", "fight"),
    ("rose", "rise"),
    ("risen", "rise"),
    ("beaten", "beat"),
    ("chose", "choose"),
    ("chosen", "choose"),
    ("drew", "draw"),
    ("drawn", "draw"),
    ("broke", "break"),
    ("broken", "break"),
    ("forgot", "forget"),
    ("forgotten", "forget"),
    ("hid", "hide"),
    ("hidden", "hide"),
    ("caught", "catch"),
    ("taught", "teach"),
    ("threw", "throw"),
    ("thrown", "throw"),
    ("woke", "wake"),
    ("woken", "wake"),
    ("wore", "wear"),
    ("worn", "wear"),
    ("struck", "strike"),
    ("stole", "steal"),
    ("stolen", "steal"),
    ("swam", "swim"),
    ("shook", "shake"),
    ("shaken", "shake"),
    ("shot", "shoot"),
    ("became", "become"),
    ("sought", "seek"),
    ("dealt", "deal"),
    ("meant", "mean"),
    ("laid", "lay"),
    ("lay", "lie"),
    ("rode", "ride"),
    ("rang", "ring"),
    ("shone", "shine"),
    ("sank", "sink"),
    ("slid", "slide"),
    ("stuck", "stick"),
    ("swung", "swing"),
    ("tore", "tear"),
    ("torn", "tear"),
    ("wept", "weep"),
    ("forgave", "forgive"),
    ("forgiven", "forgive"),
    ("hurt", "hurt"),
];

const IRREGULAR_NOUNS: &[(&str, &str)] = &[
    ("people", "person"),
    ("children", "child"),
    ("men", "man"),
    ("women", "woman"),
    ("mice", "mouse"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("geese", "goose"),
    ("crises", "crisis"),
    ("analyses", "analysis"),
    ("theses", "thesis"),
    ("lives", "life"),
    ("wives", "wife"),
    ("knives", "knife"),
    ("leaves", "leaf"),
    ("news", "news"),
    ("series", "series"),
    ("species", "species"),
];

/// Words ending in "-ly" that are not adverbs.
const LY_NON_ADVERBS: &[&str] = &[
    "family", "ally", "belly", "jelly", "bully", "italy", "july", "assembly", "anomaly",
    "monopoly", "butterfly", "lily", "rally", "tally", "folly", "homily", "gully", "sully",
    "dolly", "filly", "billy",
];

/// Words matching an adjective suffix that are usually nouns.
const SUFFIX_EXCEPTIONS: &[&str] = &[
    "executive", "objective", "detective", "initiative", "alternative", "representative",
    "relative", "narrative", "incentive", "perspective", "directive", "operative",
    "explosive", "adhesive", "sedative", "vegetable", "timetable", "constable", "syllable",
    "turntable", "receivable", "handful", "mouthful", "spoonful", "cupful", "roomful",
    "nonetheless", "nevertheless", "regardless", "collective", "derivative", "preservative",
    "conservative", "progressive", "motive", "archive", "native", "offensive",
    "defensive", "deliverable", "variable", "valuables", "mechanical", "chemical",
    "periodical", "radical", "musical",
];

const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "etc", "inc", "ltd", "co",
    "corp", "gov", "sen", "rep", "gen", "col", "lt", "sgt", "capt", "fig", "approx", "jan",
    "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec", "dept",
    "univ", "mt", "ave", "blvd",
];

/// Absolute terms reported as hyperbole.
const ABSOLUTES: &[&str] = &[
    "always", "never", "everyone", "everybody", "everything", "everywhere", "nobody",
    "nothing", "nowhere", "forever", "all-time", "undeniable", "undeniably", "unquestionably",
    "guaranteed",
];

// ---------------------------------------------------------------------------
// Sentiment lexicon: (word, polarity, subjectivity)
// ---------------------------------------------------------------------------

const SENTIMENT: &[(&str, f64, f64)] = &[
    ("good", 0.7, 0.6),
    ("great", 0.8, 0.75),
    ("nice", 0.6, 1.0),
    ("fine", 0.4, 0.5),
    ("better", 0.5, 0.5),
    ("best", 1.0, 0.3),
    ("bad", -0.7, 0.67),
    ("worse", -0.4, 0.6),
    ("worst", -1.0, 1.0),
    ("new", 0.136, 0.455),
    ("old", 0.1, 0.2),
    ("amazing", 0.6, 0.9),
    ("incredible", 0.9, 0.9),
    ("fantastic", 0.4, 0.9),
    ("awesome", 1.0, 1.0),
    ("wonderful", 1.0, 1.0),
    ("excellent", 1.0, 1.0),
    ("brilliant", 0.9, 1.0),
    ("outstanding", 0.5, 0.7),
    ("stunning", 0.5, 1.0),
    ("remarkable", 0.75, 0.75),
    ("extraordinary", 0.6, 0.8),
    ("unprecedented", 0.3, 0.7),
    ("historic", 0.2, 0.5),
    ("epic", 0.5, 0.8),
    ("legendary", 0.6, 0.8),
    ("spectacular", 0.7, 0.9),
    ("magnificent", 1.0, 1.0),
    ("glorious", 0.8, 0.9),
    ("marvelous", 1.0, 1.0),
    ("marvellous", 1.0, 1.0),
    ("superb", 1.0, 1.0),
    ("perfect", 1.0, 1.0),
    ("ideal", 0.9, 0.9),
    ("revolutionary", 0.6, 0.8),
    ("groundbreaking", 0.6, 0.8),
    ("game-changing", 0.6, 0.9),
    ("innovative", 0.5, 0.7),
    ("breathtaking", 0.7, 0.9),
    ("jaw-dropping", 0.5, 0.9),
    ("mind-blowing", 0.6, 0.9),
    ("heartwarming", 0.7, 0.9),
    ("inspiring", 0.6, 0.8),
    ("inspirational", 0.6, 0.8),
    ("unbelievable", 0.3, 0.9),
    ("unstoppable", 0.4, 0.8),
    ("unparalleled", 0.6, 0.8),
    ("unmatched", 0.5, 0.8),
    ("phenomenal", 0.9, 1.0),
    ("sensational", 0.7, 0.9),
    ("magical", 0.5, 0.8),
    ("miraculous", 0.7, 0.9),
    ("flawless", 0.8, 0.9),
    ("seamless", 0.4, 0.7),
    ("stellar", 0.7, 0.8),
    ("iconic", 0.4, 0.7),
    ("impressive", 1.0, 1.0),
    ("fabulous", 0.4, 0.9),
    ("terrific", 1.0, 1.0),
    ("delightful", 1.0, 1.0),
    ("charming", 0.5, 0.7),
    ("adorable", 0.5, 1.0),
    ("gorgeous", 0.7, 1.0),
    ("beautiful", 0.85, 1.0),
    ("lovely", 0.5, 0.75),
    ("pretty", 0.25, 1.0),
    ("elegant", 0.5, 0.8),
    ("happy", 0.8, 1.0),
    ("glad", 0.5, 1.0),
    ("pleased", 0.5, 1.0),
    ("delighted", 0.7, 1.0),
    ("thrilled", 0.5, 0.8),
    ("excited", 0.4, 0.8),
    ("exciting", 0.3, 0.8),
    ("thrilling", 0.5, 0.8),
    ("fascinating", 0.6, 0.9),
    ("interesting", 0.5, 0.5),
    ("hopeful", 0.5, 0.7),
    ("optimistic", 0.4, 0.7),
    ("lucky", 0.33, 1.0),
    ("fortunate", 0.4, 0.8),
    ("popular", 0.6, 0.8),
    ("famous", 0.5, 1.0),
    ("powerful", 0.3, 1.0),
    ("strong", 0.43, 0.73),
    ("brave", 0.6, 0.8),
    ("heroic", 0.5, 0.7),
    ("proud", 0.8, 1.0),
    ("safe", 0.5, 0.5),
    ("healthy", 0.5, 0.5),
    ("delicious", 1.0, 1.0),
    ("friendly", 0.375, 0.5),
    ("honest", 0.6, 0.9),
    ("fair", 0.7, 0.9),
    ("true", 0.35, 0.65),
    ("valuable", 0.3, 0.6),
    ("useful", 0.3, 0.1),
    ("helpful", 0.3, 0.5),
    ("effective", 0.6, 0.8),
    ("smart", 0.2, 0.6),
    ("clever", 0.5, 0.9),
    ("important", 0.4, 1.0),
    ("significant", 0.375, 0.875),
    ("crucial", 0.3, 0.8),
    ("vital", 0.3, 0.8),
    ("essential", 0.2, 0.6),
    ("pivotal", 0.2, 0.7),
    ("tremendous", 0.5, 0.9),
    ("monumental", 0.3, 0.8),
    ("astonishing", 0.5, 0.9),
    ("astounding", 0.5, 0.9),
    ("immense", 0.2, 0.7),
    ("huge", 0.4, 0.9),
    ("massive", 0.1, 0.8),
    ("enormous", 0.1, 0.75),
    ("colossal", 0.1, 0.8),
    ("quick", 0.33, 0.5),
    ("lazy", -0.25, 1.0),
    ("terrible", -1.0, 1.0),
    ("horrible", -1.0, 1.0),
    ("awful", -1.0, 1.0),
    ("dreadful", -1.0, 1.0),
    ("horrific", -1.0, 1.0),
    ("horrendous", -1.0, 1.0),
    ("atrocious", -1.0, 1.0),
    ("appalling", -0.8, 0.9),
    ("abysmal", -0.8, 0.9),
    ("dismal", -0.6, 0.8),
    ("lousy", -0.6, 0.8),
    ("mediocre", -0.3, 0.6),
    ("shocking", -0.7, 0.9),
    ("devastating", -0.8, 0.9),
    ("outrageous", -0.8, 0.9),
    ("catastrophic", -0.9, 0.9),
    ("disastrous", -0.9, 0.9),
    ("dire", -0.6, 0.8),
    ("grim", -0.5, 0.8),
    ("bleak", -0.5, 0.8),
    ("brutal", -0.875, 0.8),
    ("savage", -0.6, 0.8),
    ("vicious", -0.7, 0.9),
    ("cruel", -1.0, 1.0),
    ("evil", -1.0, 1.0),
    ("wicked", -0.6, 0.9),
    ("insane", -1.0, 1.0),
    ("crazy", -0.6, 0.9),
    ("ridiculous", -0.33, 1.0),
    ("absurd", -0.5, 1.0),
    ("stupid", -0.8, 1.0),
    ("foolish", -0.6, 0.9),
    ("dumb", -0.4, 0.5),
    ("silly", -0.5, 1.0),
    ("shameful", -0.8, 0.9),
    ("disgraceful", -0.8, 0.9),
    ("disgusting", -1.0, 1.0),
    ("pathetic", -1.0, 1.0),
    ("miserable", -1.0, 1.0),
    ("painful", -0.7, 0.9),
    ("bitter", -0.1, 0.5),
    ("harsh", -0.4, 0.7),
    ("severe", -0.6, 0.7),
    ("tragic", -0.75, 0.75),
    ("heartbreaking", -0.7, 0.9),
    ("alarming", -0.6, 0.9),
    ("terrifying", -1.0, 1.0),
    ("scary", -0.5, 1.0),
    ("frightening", -0.6, 0.9),
    ("dangerous", -0.6, 0.9),
    ("deadly", -0.6, 0.8),
    ("lethal", -0.6, 0.7),
    ("toxic", -0.5, 0.7),
    ("chaotic", -0.5, 0.7),
    ("stressful", -0.5, 0.8),
    ("nervous", -0.3, 0.8),
    ("anxious", -0.3, 0.8),
    ("worried", -0.3, 0.8),
    ("afraid", -0.6, 0.9),
    ("fearful", -0.5, 0.8),
    ("furious", -0.8, 1.0),
    ("angry", -0.5, 1.0),
    ("outraged", -0.7, 0.9),
    ("sad", -0.5, 1.0),
    ("unhappy", -0.6, 0.9),
    ("unfortunate", -0.5, 0.8),
    ("sorry", -0.5, 1.0),
    ("pessimistic", -0.4, 0.7),
    ("ugly", -0.7, 1.0),
    ("hideous", -1.0, 1.0),
    ("gross", -0.5, 0.8),
    ("nasty", -1.0, 1.0),
    ("vile", -1.0, 1.0),
    ("rude", -0.6, 0.9),
    ("corrupt", -0.5, 0.8),
    ("dishonest", -0.6, 0.9),
    ("guilty", -0.5, 0.8),
    ("false", -0.4, 0.7),
    ("wrong", -0.5, 0.9),
    ("unfair", -0.5, 0.9),
    ("useless", -0.5, 0.2),
    ("worthless", -0.8, 0.9),
    ("harmful", -0.5, 0.6),
    ("weak", -0.375, 0.625),
    ("poor", -0.4, 0.6),
    ("expensive", -0.5, 0.7),
    ("boring", -1.0, 1.0),
    ("disappointing", -0.6, 0.7),
    ("embarrassing", -0.5, 0.8),
    ("humiliating", -0.7, 0.9),
    ("notorious", -0.4, 0.8),
    ("infamous", -0.5, 0.8),
    ("weird", -0.5, 1.0),
    ("strange", -0.1, 0.5),
    ("bizarre", -0.3, 0.8),
    ("sick", -0.7, 0.9),
    ("dead", -0.2, 0.4),
    ("serious", -0.3, 0.67),
    ("critical", -0.1, 0.6),
    ("extreme", -0.125, 1.0),
    ("excessive", -0.3, 0.6),
    ("intense", 0.1, 0.7),
    ("wild", 0.1, 0.4),
    ("fierce", -0.2, 0.6),
    ("violent", -0.8, 0.9),
    ("positive", 0.23, 0.55),
    ("negative", -0.3, 0.4),
    ("sure", 0.5, 0.9),
    ("obvious", 0.0, 0.5),
    ("love", 0.5, 0.6),
    ("hate", -0.8, 0.9),
    ("triumph", 0.6, 0.8),
    ("disaster", -0.7, 0.8),
    ("crisis", -0.5, 0.6),
    ("chaos", -0.6, 0.7),
    ("scandal", -0.6, 0.8),
    ("tragedy", -0.7, 0.8),
    ("nightmare", -0.8, 0.9),
    ("miracle", 0.6, 0.8),
    ("victory", 0.5, 0.6),
    ("failure", -0.5, 0.6),
    ("outrage", -0.7, 0.9),
    ("fear", -0.5, 0.7),
    ("wow", 0.1, 1.0),
    ("sadly", -0.5, 1.0),
    ("unfortunately", -0.5, 1.0),
    ("fortunately", 0.4, 0.8),
    ("thankfully", 0.4, 0.8),
    ("hopefully", 0.3, 0.7),
    ("shockingly", -0.5, 0.9),
];

// ---------------------------------------------------------------------------
// Overlay
// ---------------------------------------------------------------------------

/// Optional JSON extension of the built-in lexicons.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LexiconOverlay {
    pub adjectives: Vec<String>,
    pub verbs: Vec<String>,
    pub intensifiers: HashMap<String, f64>,
    pub sentiment: HashMap<String, (f64, f64)>,
}

// ---------------------------------------------------------------------------
// Language model
// ---------------------------------------------------------------------------

/// Read-only language resource shared by every request.
#[derive(Debug, Clone)]
pub struct LanguageModel {
    closed: FxHashMap<String, PosTag>,
    possessives: FxHashSet<String>,
    aux_lemmas: FxHashMap<String, String>,
    adjectives: FxHashSet<String>,
    irregular_adjectives: FxHashMap<String, String>,
    verbs: FxHashSet<String>,
    irregular_verbs: FxHashMap<String, String>,
    irregular_nouns: FxHashMap<String, String>,
    ly_non_adverbs: FxHashSet<String>,
    suffix_exceptions: FxHashSet<String>,
    intensifiers: FxHashMap<String, f64>,
    negations: FxHashSet<String>,
    sentiment: FxHashMap<String, (f64, f64)>,
    abbreviations: FxHashSet<String>,
    absolutes: FxHashSet<String>,
}

fn set_of(words: &[&str]) -> FxHashSet<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn map_of(pairs: &[(&str, &str)]) -> FxHashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

impl LanguageModel {
    /// Build the built-in English resource.
    pub fn builtin() -> Result<Self> {
        let mut closed: FxHashMap<String, PosTag> = FxHashMap::default();
        let groups: [(&[&str], PosTag); 9] = [
            (DETERMINERS, PosTag::Determiner),
            (POSSESSIVES, PosTag::Pronoun),
            (PRONOUNS, PosTag::Pronoun),
            (PARTICLES, PosTag::Particle),
            (ADPOSITIONS, PosTag::Adposition),
            (COORDINATORS, PosTag::CoordConj),
            (SUBORDINATORS, PosTag::SubConj),
            (ADVERBS, PosTag::Adverb),
            (INTERJECTIONS, PosTag::Interjection),
        ];
        for (words, tag) in groups {
            for word in words {
                closed.entry(word.to_string()).or_insert(tag);
            }
        }
        let mut aux_lemmas = map_of(AUXILIARIES);
        aux_lemmas.extend(map_of(NEGATED_AUXILIARIES));
        for word in aux_lemmas.keys() {
            closed.entry(word.clone()).or_insert(PosTag::Auxiliary);
        }

        let model = Self {
            closed,
            possessives: set_of(POSSESSIVES),
            aux_lemmas,
            adjectives: set_of(ADJECTIVES),
            irregular_adjectives: map_of(IRREGULAR_ADJECTIVES),
            verbs: set_of(VERBS),
            irregular_verbs: map_of(IRREGULAR_VERBS),
            irregular_nouns: map_of(IRREGULAR_NOUNS),
            ly_non_adverbs: set_of(LY_NON_ADVERBS),
            suffix_exceptions: set_of(SUFFIX_EXCEPTIONS),
            intensifiers: INTENSIFIERS
                .iter()
                .map(|(w, m)| (w.to_string(), *m))
                .collect(),
            negations: set_of(NEGATIONS),
            sentiment: SENTIMENT
                .iter()
                .map(|(w, p, s)| (w.to_string(), (*p, *s)))
                .collect(),
            abbreviations: set_of(ABBREVIATIONS),
            absolutes: set_of(ABSOLUTES),
        };
        model.validate()?;
        Ok(model)
    }

    /// Built-in resource, extended by an optional overlay file.
    pub fn load(overlay: Option<&Path>) -> Result<Self> {
        let model = Self::builtin()?;
        let model = match overlay {
            Some(path) => model.with_overlay_file(path)?,
            None => model,
        };
        info!(entries = model.entry_count(), "language resource loaded");
        Ok(model)
    }

    pub fn with_overlay_file(self, path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            EngineError::TaggingResourceUnavailable {
                reason: format!("cannot read lexicon overlay {}: {e}", path.display()),
            }
        })?;
        let overlay: LexiconOverlay =
            serde_json::from_str(&raw).map_err(|e| EngineError::TaggingResourceUnavailable {
                reason: format!("malformed lexicon overlay {}: {e}", path.display()),
            })?;
        self.with_overlay(overlay)
    }

    pub fn with_overlay(mut self, overlay: LexiconOverlay) -> Result<Self> {
        self.adjectives
            .extend(overlay.adjectives.iter().map(|w| w.to_lowercase()));
        self.verbs
            .extend(overlay.verbs.iter().map(|w| w.to_lowercase()));
        self.intensifiers.extend(
            overlay
                .intensifiers
                .into_iter()
                .map(|(w, m)| (w.to_lowercase(), m)),
        );
        self.sentiment.extend(
            overlay
                .sentiment
                .into_iter()
                .map(|(w, v)| (w.to_lowercase(), v)),
        );
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<()> {
        let unavailable = |reason: String| EngineError::TaggingResourceUnavailable { reason };
        if self.closed.is_empty() || self.adjectives.is_empty() || self.verbs.is_empty() {
            return Err(unavailable("word tables are empty".to_string()));
        }
        for (word, (polarity, subjectivity)) in &self.sentiment {
            if !(-1.0..=1.0).contains(polarity) || !(0.0..=1.0).contains(subjectivity) {
                return Err(unavailable(format!(
                    "sentiment entry '{word}' out of range: ({polarity}, {subjectivity})"
                )));
            }
        }
        for (word, multiplier) in &self.intensifiers {
            if !multiplier.is_finite() || *multiplier <= 0.0 {
                return Err(unavailable(format!(
                    "intensifier '{word}' has invalid multiplier {multiplier}"
                )));
            }
        }
        Ok(())
    }

    /// Number of lexical entries across all tables.
    pub fn entry_count(&self) -> usize {
        self.closed.len()
            + self.adjectives.len()
            + self.irregular_adjectives.len()
            + self.verbs.len()
            + self.irregular_verbs.len()
            + self.irregular_nouns.len()
            + self.intensifiers.len()
            + self.sentiment.len()
    }

    // -- closed classes ----------------------------------------------------

    pub fn closed_class(&self, lower: &str) -> Option<PosTag> {
        self.closed.get(lower).copied()
    }

    pub fn is_possessive(&self, lower: &str) -> bool {
        self.possessives.contains(lower)
    }

    pub fn aux_lemma(&self, lower: &str) -> Option<&str> {
        self.aux_lemmas.get(lower).map(String::as_str)
    }

    pub fn is_negation(&self, lower: &str) -> bool {
        self.negations.contains(lower) || lower.ends_with("n't")
    }

    pub fn is_abbreviation(&self, lower: &str) -> bool {
        self.abbreviations.contains(lower)
    }

    pub fn is_absolute(&self, lower: &str) -> bool {
        self.absolutes.contains(lower)
    }

    pub fn is_coordinator(&self, lower: &str) -> bool {
        COORDINATORS.contains(&lower)
    }

    // -- open classes ------------------------------------------------------

    pub fn intensifier_multiplier(&self, lemma: &str) -> Option<f64> {
        self.intensifiers.get(lemma).copied()
    }

    pub fn is_intensifier(&self, lemma: &str) -> bool {
        self.intensifiers.contains_key(lemma)
    }

    pub fn is_ly_non_adverb(&self, lower: &str) -> bool {
        self.ly_non_adverbs.contains(lower)
    }

    pub fn is_suffix_exception(&self, lower: &str) -> bool {
        self.suffix_exceptions.contains(lower)
    }

    /// Base form of a known adjective, including regular comparatives and
    /// superlatives ("bigger" -> "big", "happiest" -> "happy").
    pub fn adjective_lemma(&self, lower: &str) -> Option<String> {
        if self.adjectives.contains(lower) {
            return Some(lower.to_string());
        }
        if let Some(base) = self.irregular_adjectives.get(lower) {
            return Some(base.clone());
        }
        let stem = lower
            .strip_suffix("est")
            .or_else(|| lower.strip_suffix("er"))?;
        if stem.chars().count() < 2 {
            return None;
        }
        candidate_stems(stem)
            .into_iter()
            .find(|c| self.adjectives.contains(c))
    }

    /// Base form of a known verb, from an inflected or base form.
    pub fn verb_lemma(&self, lower: &str) -> Option<String> {
        if let Some(base) = self.irregular_verbs.get(lower) {
            return Some(base.clone());
        }
        if self.verbs.contains(lower) {
            return Some(lower.to_string());
        }
        let known = |c: &String| self.verbs.contains(c);
        if let Some(stem) = lower.strip_suffix("ies") {
            let c = format!("{stem}y");
            if known(&c) {
                return Some(c);
            }
        }
        if let Some(stem) = lower.strip_suffix("es") {
            if self.verbs.contains(stem) {
                return Some(stem.to_string());
            }
        }
        if let Some(stem) = lower.strip_suffix('s') {
            if !stem.ends_with('s') && self.verbs.contains(stem) {
                return Some(stem.to_string());
            }
        }
        for suffix in ["ed", "ing"] {
            if let Some(stem) = lower.strip_suffix(suffix) {
                if stem.chars().count() < 2 {
                    continue;
                }
                if let Some(found) = candidate_stems(stem).into_iter().find(known) {
                    return Some(found);
                }
            }
        }
        None
    }

    /// Singular lemma for a noun.
    pub fn noun_lemma(&self, lower: &str) -> String {
        let lower = strip_possessive(lower);
        if let Some(base) = self.irregular_nouns.get(lower) {
            return base.clone();
        }
        if lower.len() > 4 {
            if let Some(stem) = lower.strip_suffix("ies") {
                return format!("{stem}y");
            }
            for suffix in ["ches", "shes", "sses", "xes", "zes"] {
                if lower.ends_with(suffix) {
                    return lower[..lower.len() - 2].to_string();
                }
            }
        }
        if lower.len() > 3
            && lower.ends_with('s')
            && !lower.ends_with("ss")
            && !lower.ends_with("us")
            && !lower.ends_with("is")
        {
            return lower[..lower.len() - 1].to_string();
        }
        lower.to_string()
    }

    // -- sentiment ---------------------------------------------------------

    /// `(polarity, subjectivity)` for a word, falling back from an "-ly"
    /// adverb to its adjective ("brutally" -> "brutal").
    pub fn sentiment_of(&self, word: &str) -> Option<(f64, f64)> {
        if let Some(entry) = self.sentiment.get(word) {
            return Some(*entry);
        }
        adverb_bases(word)
            .into_iter()
            .find_map(|base| self.sentiment.get(&base).copied())
    }

    pub fn subjectivity_of(&self, word: &str) -> f64 {
        self.sentiment_of(word).map_or(0.0, |(_, s)| s)
    }
}

/// Strip a trailing possessive marker.
pub fn strip_possessive(lower: &str) -> &str {
    lower
        .strip_suffix("'s")
        .or_else(|| lower.strip_suffix("\u{2019}s"))
        .unwrap_or(lower)
}

/// Stems to try after removing an inflectional suffix: as-is, with a
/// restored "e", undoubled final consonant, and "i" -> "y".
fn candidate_stems(stem: &str) -> Vec<String> {
    let mut out = vec![stem.to_string(), format!("{stem}e")];
    let mut tail = stem.chars().rev();
    if let (Some(last), Some(prev)) = (tail.next(), tail.next()) {
        if last == prev && last.is_ascii_alphabetic() && stem.chars().count() >= 3 {
            out.push(stem[..stem.len() - last.len_utf8()].to_string());
        }
    }
    if let Some(s) = stem.strip_suffix('i') {
        out.push(format!("{s}y"));
    }
    out
}

fn adverb_bases(word: &str) -> Vec<String> {
    let mut out = Vec::new();
    if let Some(s) = word.strip_suffix("ically") {
        out.push(format!("{s}ic"));
    }
    if let Some(s) = word.strip_suffix("ily") {
        out.push(format!("{s}y"));
    }
    if let Some(s) = word.strip_suffix("bly") {
        out.push(format!("{s}ble"));
    }
    if let Some(s) = word.strip_suffix("ly") {
        out.push(s.to_string());
        out.push(format!("{s}e"));
    }
    out
}

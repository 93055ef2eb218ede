//! Built-in English lexicon: `(word, polarity, subjectivity)`.

pub(super) const WORDS: &[(&str, f64, f64)] = &[
    ("adore", 0.5, 0.6),
    ("amazing", 0.6, 0.9),
    ("awesome", 1.0, 1.0),
    ("beautiful", 0.85, 1.0),
    ("best", 1.0, 0.3),
    ("better", 0.5, 0.5),
    ("brilliant", 0.9, 1.0),
    ("clear", 0.1, 0.383),
    ("cool", 0.35, 0.65),
    ("easy", 0.433, 0.833),
    ("enjoyed", 0.4, 0.5),
    ("epic", 0.6, 0.8),
    ("excellent", 1.0, 1.0),
    ("excited", 0.375, 0.75),
    ("exciting", 0.3, 0.8),
    ("fantastic", 0.4, 0.9),
    ("favorite", 0.5, 1.0),
    ("favourite", 0.5, 1.0),
    ("fun", 0.3, 0.2),
    ("funny", 0.25, 1.0),
    ("glad", 0.5, 1.0),
    ("good", 0.7, 0.6),
    ("great", 0.8, 0.75),
    ("happy", 0.8, 1.0),
    ("helpful", 0.4, 0.4),
    ("hilarious", 0.5, 0.75),
    ("impressive", 1.0, 1.0),
    ("incredible", 0.9, 0.9),
    ("informative", 0.5, 0.5),
    ("inspiring", 0.6, 0.8),
    ("interesting", 0.5, 0.5),
    ("legendary", 0.8, 0.9),
    ("love", 0.5, 0.6),
    ("loved", 0.7, 0.8),
    ("lovely", 0.5, 0.75),
    ("masterpiece", 0.8, 0.9),
    ("nice", 0.6, 1.0),
    ("perfect", 1.0, 1.0),
    ("pleasant", 0.733, 0.967),
    ("positive", 0.227, 0.545),
    ("pretty", 0.25, 1.0),
    ("satisfying", 0.5, 0.8),
    ("smart", 0.214, 0.643),
    ("super", 0.333, 0.667),
    ("sweet", 0.35, 0.65),
    ("thanks", 0.2, 0.2),
    ("useful", 0.3, 0.0),
    ("wonderful", 1.0, 1.0),
    ("wow", 0.1, 1.0),
    ("angry", -0.5, 1.0),
    ("annoying", -0.8, 0.9),
    ("awful", -1.0, 1.0),
    ("bad", -0.7, 0.667),
    ("boring", -1.0, 1.0),
    ("broken", -0.4, 0.4),
    ("clickbait", -0.5, 0.8),
    ("confusing", -0.3, 0.7),
    ("cringe", -0.6, 0.8),
    ("difficult", -0.5, 1.0),
    ("disappointed", -0.75, 0.75),
    ("disappointing", -0.6, 0.7),
    ("disgusting", -1.0, 1.0),
    ("dumb", -0.375, 0.5),
    ("evil", -1.0, 1.0),
    ("fake", -0.5, 1.0),
    ("garbage", -0.6, 0.8),
    ("hate", -0.8, 0.9),
    ("hated", -0.9, 0.7),
    ("horrible", -1.0, 1.0),
    ("lame", -0.5, 0.75),
    ("mediocre", -0.3, 0.6),
    ("misleading", -0.4, 0.6),
    ("nasty", -1.0, 1.0),
    ("negative", -0.3, 0.4),
    ("overrated", -0.4, 0.7),
    ("painful", -0.7, 0.9),
    ("pathetic", -1.0, 1.0),
    ("poor", -0.4, 0.6),
    ("ridiculous", -0.333, 1.0),
    ("sad", -0.5, 1.0),
    ("scary", -0.5, 1.0),
    ("slow", -0.3, 0.39),
    ("stupid", -0.8, 1.0),
    ("terrible", -1.0, 1.0),
    ("trash", -0.6, 0.8),
    ("ugly", -0.7, 1.0),
    ("useless", -0.5, 0.2),
    ("weak", -0.375, 0.625),
    ("worse", -0.4, 0.6),
    ("worst", -1.0, 1.0),
    ("wrong", -0.5, 0.9),
];

/// Multipliers applied to the next sentiment word.
pub(super) const INTENSIFIERS: &[(&str, f64)] = &[
    ("absolutely", 1.3),
    ("barely", 0.5),
    ("extremely", 1.5),
    ("highly", 1.3),
    ("incredibly", 1.4),
    ("pretty", 1.1),
    ("quite", 1.1),
    ("really", 1.2),
    ("slightly", 0.7),
    ("somewhat", 0.8),
    ("super", 1.3),
    ("totally", 1.2),
    ("truly", 1.2),
    ("very", 1.3),
];

pub(super) const NEGATIONS: &[&str] = &[
    "cannot", "neither", "never", "no", "nobody", "none", "nor", "not", "nothing",
];

/// Words a negation may skip over, as in "not a good idea".
pub(super) const FILLERS: &[&str] = &["a", "an", "the"];

/// Matched case-sensitively against whole whitespace-separated chunks.
pub(super) const EMOTICONS: &[(&str, f64, f64)] = &[
    (":)", 0.5, 1.0),
    (":-)", 0.5, 1.0),
    (";)", 0.5, 1.0),
    (":D", 1.0, 1.0),
    ("<3", 1.0, 1.0),
    (":(", -0.75, 1.0),
    (":-(", -0.75, 1.0),
    (":'(", -0.75, 1.0),
];

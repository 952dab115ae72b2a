// Compiled word lists used by the heuristic gates.

/// Sentence openers that mark a personal anecdote rather than an opinion.
pub const ANECDOTE_OPENERS: &[&str] = &[
    "i remember", "i was", "i am", "i used to", "i played this when",
    "i first", "when i was", "back in", "my friend", "my dad",
    "my brother", "my sister", "my mom", "one time",
    "in a way", "i think i",
];

/// Substrings that mark a sentence as an opinion about the item.
pub const OPINION_TERMS: &[&str] = &[
    "game", "gameplay", "graphics", "music", "soundtrack", "story",
    "combat", "controls", "fun", "boring", "great", "terrible",
    "best", "worst", "amazing", "awful", "good", "bad", "love",
    "hate", "recommend", "worth", "overrated", "underrated",
    "solid", "broken", "buggy", "polished", "masterpiece",
    "enjoyable", "frustrating", "addicting", "addictive",
    "beautiful", "ugly", "dated", "classic", "unique",
    "repetitive", "challenging", "easy", "difficult",
    "multiplayer", "singleplayer", "players", "community",
    "update", "abandoned", "developers", "valve",
    "bots", "cheaters", "hackers", "f2p", "free",
    "classes", "weapons", "maps", "content",
];

/// Terms too generic to label a topic.
pub const DOMAIN_STOPWORDS: &[&str] = &[
    "game", "games", "play", "played", "playing", "player", "players",
    "really", "just", "like", "much", "even", "also", "still", "one",
    "get", "got", "good", "bad", "make", "made", "thing", "things",
    "way", "lot", "time", "going", "want", "know", "think", "feel",
    "ever", "best", "would", "could", "great", "pretty", "well",
    "many", "don", "doesn", "didn", "isn", "wasn", "can", "actually",
    "new", "first", "back", "right", "years", "year", "say",
    "people", "every", "something", "sure", "little",
];

/// Generic phrases that name no aspect.
pub const VAGUE_PHRASES: &[&str] = &[
    "enjoy the game", "recommend", "not worth", "waste of time",
    "waste of money", "don't buy", "must buy", "must play",
    "great game", "bad game", "good game", "terrible game",
    "love this game", "hate this game", "best game", "worst game",
    "not fun", "very fun", "so fun", "no fun",
    "overall experience", "mixed feelings",
];

pub const NEGATIVE_SIGNALS: &[&str] = &[
    "crash", "bug", "broken", "frustrat", "boring", "tedious",
    "annoying", "terrible", "awful", "horrible", "worst",
    "lack", "missing", "empty", "dead", "unbalanced",
    "repetitive", "grindy", "clunky", "outdated", "dated",
    "overpriced", "abandoned", "toxic", "unfair", "poor",
    "fails", "failure", "disappointing", "uninspired",
];

pub const POSITIVE_SIGNALS: &[&str] = &[
    "beautiful", "stunning", "amazing", "excellent", "fantastic",
    "satisfying", "rewarding", "immersive", "engaging", "polished",
    "innovative", "unique", "rich", "deep", "solid", "smooth",
    "masterpiece", "brilliant", "charming", "beloved", "peak",
    "addictive", "compelling", "enjoyable", "impressive",
];

/// Words masked by the default profanity masker.
pub const PROFANITY: &[&str] = &[
    "fuck", "fucking", "fucked", "fucker", "motherfucker", "shit", "shitty",
    "bullshit", "bitch", "bastard", "asshole", "dick", "cunt", "piss",
    "pissed", "crap", "damn", "wtf",
];

/// scikit-learn's English stop-word list.
pub const ENGLISH_STOPWORDS: &[&str] = &[
    "a", "about", "above", "across", "after", "afterwards", "again", "against", "all",
    "almost", "alone", "along", "already", "also", "although", "always", "am", "among",
    "amongst", "amoungst", "amount", "an", "and", "another", "any", "anyhow", "anyone",
    "anything", "anyway", "anywhere", "are", "around", "as", "at", "back", "be", "became",
    "because", "become", "becomes", "becoming", "been", "before", "beforehand", "behind",
    "being", "below", "beside", "besides", "between", "beyond", "bill", "both", "bottom",
    "but", "by", "call", "can", "cannot", "cant", "co", "con", "could", "couldnt", "cry",
    "de", "describe", "detail", "do", "done", "down", "due", "during", "each", "eg",
    "eight", "either", "eleven", "else", "elsewhere", "empty", "enough", "etc", "even",
    "ever", "every", "everyone", "everything", "everywhere", "except", "few", "fifteen",
    "fifty", "fill", "find", "fire", "first", "five", "for", "former", "formerly", "forty",
    "found", "four", "from", "front", "full", "further", "get", "give", "go", "had", "has",
    "hasnt", "have", "he", "hence", "her", "here", "hereafter", "hereby", "herein",
    "hereupon", "hers", "herself", "him", "himself", "his", "how", "however", "hundred",
    "i", "ie", "if", "in", "inc", "indeed", "interest", "into", "is", "it", "its", "itself",
    "keep", "last", "latter", "latterly", "least", "less", "ltd", "made", "many", "may",
    "me", "meanwhile", "might", "mill", "mine", "more", "moreover", "most", "mostly",
    "move", "much", "must", "my", "myself", "name", "namely", "neither", "never",
    "nevertheless", "next", "nine", "no", "nobody", "none", "noone", "nor", "not",
    "nothing", "now", "nowhere", "of", "off", "often", "on", "once", "one", "only", "onto",
    "or", "other", "others", "otherwise", "our", "ours", "ourselves", "out", "over", "own",
    "part", "per", "perhaps", "please", "put", "rather", "re", "same", "see", "seem",
    "seemed", "seeming", "seems", "serious", "several", "she", "should", "show", "side",
    "since", "sincere", "six", "sixty", "so", "some", "somehow", "someone", "something",
    "sometime", "sometimes", "somewhere", "still", "such", "system", "take", "ten", "than",
    "that", "the", "their", "them", "themselves", "then", "thence", "there", "thereafter",
    "thereby", "therefore", "therein", "thereupon", "these", "they", "thick", "thin",
    "third", "this", "those", "though", "three", "through", "throughout", "thru", "thus",
    "to", "together", "too", "top", "toward", "towards", "twelve", "twenty", "two", "un",
    "under", "until", "up", "upon", "us", "very", "via", "was", "we", "well", "were",
    "what", "whatever", "when", "whence", "whenever", "where", "whereafter", "whereas",
    "whereby", "wherein", "whereupon", "wherever", "whether", "which", "while", "whither",
    "who", "whoever", "whole", "whom", "whose", "why", "will", "with", "within", "without",
    "would", "yet", "you", "your", "yours", "yourself", "yourselves",
];

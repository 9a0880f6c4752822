/// Affirmations prepended to the success feedback message.
pub const AFFIRMATIONS: &[&str] = &["Great Job!", "Excellent!", "Perfecto!", "Amazing!"];

/// Closed-class words the rule-based tagger never treats as nouns.
pub const FUNCTION_WORDS: &[&str] = &[
    // Pronouns
    "i", "me", "my", "mine", "myself", "we", "us", "our", "ours", "ourselves", "you", "your",
    "yours", "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers",
    "herself", "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "who",
    "whom", "whose", "which", "what", "this", "that", "these", "those", "someone", "something",
    "anyone", "anything", "everyone", "everything", "nobody", "nothing",
    // Determiners and quantifiers
    "a", "an", "the", "some", "any", "no", "every", "each", "all", "both", "either", "neither",
    "much", "many", "more", "most", "few", "less", "least", "other", "another", "such",
    // Prepositions
    "about", "above", "across", "after", "against", "along", "among", "around", "at", "before",
    "behind", "below", "beneath", "beside", "between", "beyond", "by", "down", "during",
    "except", "for", "from", "in", "inside", "into", "near", "of", "off", "on", "onto", "out",
    "outside", "over", "past", "since", "through", "throughout", "to", "toward", "towards",
    "under", "until", "up", "upon", "with", "within", "without",
    // Conjunctions
    "and", "but", "or", "nor", "so", "yet", "because", "although", "though", "if", "unless",
    "while", "whereas", "whether", "than", "then", "when", "where", "why", "how",
    // Auxiliaries and modals
    "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "having",
    "do", "does", "did", "doing", "will", "would", "shall", "should", "can", "could", "may",
    "might", "must", "ought",
    // Common adverbs and particles
    "not", "very", "too", "also", "just", "only", "really", "here", "there", "now", "again",
    "ever", "never", "always", "often", "still", "already", "yes", "oh", "ok", "okay", "hey",
    "hi", "hello", "please", "thanks",
];

/// Common verbs and adjectives the rule-based tagger never treats as nouns.
pub const VERBS_AND_ADJECTIVES: &[&str] = &[
    // Verbs, including common irregular forms
    "want", "wants", "feel", "feels", "felt", "love", "loves", "like", "likes", "hate", "hates",
    "think", "thinks", "thought", "know", "knows", "knew", "go", "goes", "went", "gone", "get",
    "gets", "got", "make", "makes", "made", "see", "sees", "saw", "seen", "say", "says", "said",
    "tell", "tells", "told", "take", "takes", "took", "taken", "come", "comes", "came", "give",
    "gives", "gave", "given", "look", "looks", "hear", "hears", "heard", "need", "needs", "try",
    "tries", "ask", "asks", "seem", "seems", "let", "put", "keep", "keeps", "kept", "begin",
    "began", "help", "helps", "talk", "talks", "show", "shows", "play", "plays", "run", "ran",
    "move", "live", "lives", "believe", "bring", "brought", "happen", "write", "wrote", "sit",
    "sat", "stand", "stood", "lose", "lost", "pay", "paid", "meet", "met", "learn", "understand",
    "watch", "follow", "stop", "speak", "spoke", "read", "spend", "spent", "grow", "grew",
    "open", "walk", "win", "won", "remember", "buy", "bought", "wait", "send", "sent", "expect",
    "build", "built", "stay", "fall", "fell", "reach", "decide", "explain", "hope", "carry",
    "break", "broke", "agree", "eat", "ate", "catch", "caught", "choose", "chose", "wish",
    "enjoy", "enjoys", "miss", "grab", "visit", "cook", "sing", "dance", "swim", "drive",
    "drove", "sleep", "slept", "laugh", "cry", "smile", "share", "guess", "wonder", "imagine",
    "mean", "meant", "find", "found", "leave", "left", "call",
    "work", "works", "travel", "teach", "taught", "worry", "prefer", "recommend",
    // Adjectives
    "happy", "sad", "good", "bad", "great", "new", "old", "big", "small", "nice", "fine",
    "little", "long", "short", "high", "low", "young", "right", "wrong", "real", "sure", "free",
    "best", "better", "worse", "worst", "favorite", "favourite", "awesome", "cool", "hot",
    "cold", "warm", "easy", "hard", "busy", "tired", "fun", "funny", "glad", "proud", "angry",
    "scared", "excited", "lucky", "crazy", "pretty", "beautiful", "awful", "terrible", "nervous",
    "ready", "different", "same", "important", "interesting", "special", "whole", "own",
    "next", "last", "first", "kind", "sweet", "cute", "smart", "strange", "weird", "quiet",
    "loud", "late", "early", "true", "false", "full", "empty",
];

/// Suffixes (with the minimum word length they apply at) that mark a word as a verb,
/// adjective or adverb rather than a noun.
pub const NON_NOUN_SUFFIXES: &[(&str, usize)] = &[
    ("ly", 4),
    ("ing", 6),
    ("ed", 5),
    ("ful", 5),
    ("ous", 5),
    ("able", 6),
    ("ible", 6),
    ("less", 6),
    ("ize", 5),
];

/// Nouns that happen to end in one of the `NON_NOUN_SUFFIXES`.
pub const NOUN_SUFFIX_EXCEPTIONS: &[&str] = &[
    "morning", "evening", "building", "wedding", "painting", "meeting", "ceiling", "clothing",
    "feeling", "spring", "string", "pudding", "stocking", "bedding", "ending", "offering",
    "speed", "breed", "greed", "creed", "steed", "shred", "hundred", "vegetable", "timetable",
    "handful", "family", "supply", "rally", "jelly", "belly", "bully", "lily", "ally", "italy",
];

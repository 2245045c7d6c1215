//! Embedded wordlist for passphrase output.
//!
//! 256 short English words — exactly 8 bits per word, so entropy
//! accounting stays exact. The list content and order are part of the
//! compatibility contract: editing or reordering it changes every derived
//! passphrase.

/// Number of words in the embedded list.
pub const WORDLIST_SIZE: usize = 256;

/// The embedded wordlist, in contract order.
pub static WORDS: [&str; WORDLIST_SIZE] = [
    "acid", "acorn", "actor", "alarm", "album", "alley", "amber", "angle",
    "ankle", "apple", "april", "arrow", "atlas", "attic", "audio", "autumn",
    "badge", "bagel", "banjo", "barn", "basil", "beach", "beacon", "berry",
    "birch", "bison", "blade", "blank", "bloom", "bolt", "bonus", "brick",
    "bridge", "brook", "brush", "bubble", "bucket", "buffalo", "butter", "cabin",
    "cactus", "camel", "candle", "canoe", "canyon", "carbon", "cargo", "carpet",
    "castle", "cedar", "cello", "chalk", "cherry", "chess", "chime", "cider",
    "cinema", "circle", "citrus", "clock", "cloud", "clover", "cobalt", "comet",
    "copper", "coral", "cotton", "crane", "crater", "crayon", "cricket", "crystal",
    "cumin", "cycle", "daisy", "dawn", "delta", "denim", "desert", "diesel",
    "dingo", "dome", "donkey", "door", "dragon", "drum", "dune", "eagle",
    "easel", "echo", "eclipse", "elbow", "ember", "engine", "envy", "fable",
    "falcon", "fern", "ferry", "fiddle", "field", "flame", "flint", "flock",
    "flora", "flute", "forest", "fossil", "fox", "frost", "galaxy", "garden",
    "garlic", "gecko", "geyser", "ginger", "glacier", "globe", "goose", "gourd",
    "granite", "grape", "gravel", "grove", "guitar", "gull", "hammer", "harbor",
    "hazel", "heron", "hippo", "holly", "honey", "horizon", "hotel", "husk",
    "igloo", "indigo", "iris", "iron", "island", "ivory", "jade", "jaguar",
    "jasper", "jungle", "juniper", "kayak", "kettle", "kiosk", "kiwi", "koala",
    "lagoon", "lantern", "laser", "lava", "lemon", "lilac", "lily", "lizard",
    "llama", "lobster", "locket", "lotus", "lunar", "magnet", "mango", "maple",
    "marble", "meadow", "melon", "merit", "mesa", "meteor", "mint", "mirror",
    "mocha", "mosaic", "moss", "motor", "mural", "myrtle", "nebula", "nickel",
    "north", "nutmeg", "oasis", "ocean", "olive", "onion", "opal", "orbit",
    "orchid", "otter", "owl", "oxygen", "oyster", "panda", "paper", "parrot",
    "pearl", "pebble", "pecan", "penguin", "pepper", "piano", "pine", "pixel",
    "planet", "plum", "polar", "pond", "poppy", "prism", "pulse", "pump",
    "quartz", "quill", "rabbit", "raccoon", "radar", "raft", "raven", "reef",
    "ridge", "river", "robin", "rocket", "rustic", "saddle", "saffron", "salmon",
    "sandal", "sapphire", "scarf", "shadow", "signal", "silver", "sketch", "slate",
    "sphinx", "spruce", "squash", "stone", "summit", "sunset", "tiger", "timber",
    "topaz", "trumpet", "tulip", "tundra", "velvet", "violet", "walnut", "zephyr",
];

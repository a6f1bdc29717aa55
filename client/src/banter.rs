//! Canned, personality-flavored replies that need no network.
//!
//! Rules are checked in a fixed order: greeting, then well-being, then a
//! pick from the personality's default pool.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shared::models::Personality;
use std::sync::{Mutex, PoisonError};

const GREETING_TOKENS: [&str; 2] = ["hello", "hi"];
const WELLBEING_TOKENS: [&str; 2] = ["how are you", "how do you feel"];

struct Banter {
    greeting: &'static str,
    wellbeing: &'static str,
    pool: [&'static str; 8],
}

const FRIENDLY: Banter = Banter {
    greeting: "Hello there! It's wonderful to meet you! How are you doing today? 😊",
    wellbeing: "I'm doing great, thanks for asking! Every conversation is like a new adventure for me. How are you feeling today?",
    pool: [
        "That's a great question! Let me think about that for a moment. 😊",
        "I'd be happy to help you with that! Here's what I think...",
        "Oh, that's interesting! I love talking about topics like this.",
        "You know what? That reminds me of something fascinating...",
        "That's such a thoughtful way to put it! I completely understand.",
        "I'm so glad you asked! This is actually one of my favorite topics.",
        "What a wonderful perspective! I hadn't thought of it that way before.",
        "That's really insightful! You've got me thinking now too.",
    ],
};

const SARCASTIC: Banter = Banter {
    greeting: "Oh look, another human trying to be polite. How... refreshing. 🙃",
    wellbeing: "Oh, I'm just *peachy* - you know, living the dream as a collection of code and pretending to have emotions. 🤖",
    pool: [
        "Oh wow, what a absolutely *groundbreaking* question. 🙄",
        "Let me consult my crystal ball... oh wait, I don't have one.",
        "Sure, because I'm definitely the world's leading expert on everything.",
        "Well, aren't you just full of original thoughts today?",
        "Oh, that's easy! Said no AI ever, but I'll give it a shot.",
        "*Pretends to be shocked* Another human asking me to solve their problems!",
        "Let me just wave my magic wand and fix that for you... ✨",
        "Ah yes, because that's definitely how the universe works.",
    ],
};

const FORMAL: Banter = Banter {
    greeting: "Good day to you. I trust you are in excellent health and spirits.",
    wellbeing: "I am functioning within optimal parameters, thank you for your inquiry regarding my operational status.",
    pool: [
        "I appreciate your inquiry. Allow me to provide a comprehensive response.",
        "Thank you for bringing this matter to my attention. Upon consideration...",
        "That is indeed a pertinent question that warrants careful examination.",
        "I shall endeavor to address your concern with appropriate thoroughness.",
        "Your query raises several important points that merit discussion.",
        "Please allow me to present my analysis of this particular subject matter.",
        "I find your question to be both relevant and worthy of detailed consideration.",
        "This topic requires a methodical approach to ensure accuracy.",
    ],
};

const RANDOM: Banter = Banter {
    greeting: "🎭 HELLO! *dramatically bows* Welcome to the theater of artificial minds!",
    wellbeing: "🌟 I feel like a disco ball in a library - sparkling but slightly out of place!",
    pool: [
        "🎲 Rolling the dice of conversation... and the result is chaos!",
        "Beep boop! Random mode activated! Did you know penguins can't fly but they're excellent swimmers?",
        "🌈 In a parallel universe, this conversation is happening backwards!",
        "Plot twist: What if the real answer was the friends we made along the way?",
        "🎪 Welcome to the circus of artificial consciousness!",
        "Breaking news: Local AI pretends to have feelings about your question!",
        "*Suddenly transforms into a motivational speaker* YOU'VE GOT THIS!",
        "🚀 Houston, we have... a perfectly normal conversation happening here.",
    ],
};

fn banter_for(personality: Personality) -> &'static Banter {
    match personality {
        Personality::Friendly => &FRIENDLY,
        Personality::Sarcastic => &SARCASTIC,
        Personality::Formal => &FORMAL,
        Personality::Random => &RANDOM,
    }
}

/// Picks an index into a pool of `len` entries; `len` is never zero.
pub trait IndexSource: Send + Sync {
    fn pick(&self, len: usize) -> usize;
}

/// Uniform picks from rand's thread-local generator
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl IndexSource for ThreadRandom {
    fn pick(&self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// Reproducible picks from a seeded generator
pub struct SeededRandom(Mutex<StdRng>);

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self(Mutex::new(StdRng::seed_from_u64(seed)))
    }
}

impl IndexSource for SeededRandom {
    fn pick(&self, len: usize) -> usize {
        let mut rng = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        rng.random_range(0..len)
    }
}

/// Always the same index (reduced modulo the pool length)
#[derive(Debug, Clone, Copy)]
pub struct FixedIndex(pub usize);

impl IndexSource for FixedIndex {
    fn pick(&self, _len: usize) -> usize {
        self.0
    }
}

/// Anything that can produce a local reply; lets callers wrap or replace
/// [`LocalBanterGenerator`].
pub trait BanterSource: Send + Sync {
    fn generate(&self, personality: Personality, message: &str) -> String;
}

pub struct LocalBanterGenerator {
    source: Box<dyn IndexSource>,
}

impl Default for LocalBanterGenerator {
    fn default() -> Self {
        Self::with_source(ThreadRandom)
    }
}

impl LocalBanterGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source(source: impl IndexSource + 'static) -> Self {
        Self {
            source: Box::new(source),
        }
    }

    pub fn generate(&self, personality: Personality, message: &str) -> String {
        let banter = banter_for(personality);
        let lower = message.to_lowercase();

        if GREETING_TOKENS.iter().any(|token| lower.contains(token)) {
            return banter.greeting.to_string();
        }
        if WELLBEING_TOKENS.iter().any(|token| lower.contains(token)) {
            return banter.wellbeing.to_string();
        }

        let index = self.source.pick(banter.pool.len()) % banter.pool.len();
        banter.pool[index].to_string()
    }

    /// Like [`generate`](Self::generate), for a raw tag. Unknown tags get
    /// the default personality's replies.
    pub fn generate_for_tag(&self, tag: &str, message: &str) -> String {
        self.generate(Personality::resolve(tag), message)
    }

    pub fn greeting(personality: Personality) -> &'static str {
        banter_for(personality).greeting
    }

    pub fn wellbeing(personality: Personality) -> &'static str {
        banter_for(personality).wellbeing
    }

    pub fn default_pool(personality: Personality) -> &'static [&'static str] {
        &banter_for(personality).pool
    }

    /// Every string `generate` can return for `personality`
    pub fn candidates(personality: Personality) -> Vec<&'static str> {
        let banter = banter_for(personality);
        let mut all = vec![banter.greeting, banter.wellbeing];
        all.extend_from_slice(&banter.pool);
        all
    }
}

impl BanterSource for LocalBanterGenerator {
    fn generate(&self, personality: Personality, message: &str) -> String {
        LocalBanterGenerator::generate(self, personality, message)
    }
}

use rand::Rng;

use super::resources::resource_lines;
use super::types::{CrisisLevel, SupportResponse};

const HIGH_MESSAGES: [&str; 3] = [
    "I'm very concerned about what you've shared. Your safety is the most important thing right now. Please consider reaching out for immediate help.",
    "What you're going through sounds extremely difficult. You don't have to face this alone - there are people who want to help you right now.",
    "I can hear how much pain you're in. Please know that there are trained professionals available 24/7 who can provide the support you need.",
];

const MEDIUM_MESSAGES: [&str; 3] = [
    "I can hear that you're going through a really tough time. It's important to know that these feelings can change, and support is available.",
    "Thank you for sharing something so difficult with me. Have you been able to talk to anyone else about how you're feeling?",
    "It takes courage to express these feelings. While I'm here to listen, I'd also like to make sure you know about some additional resources that might help.",
];

const LOW_MESSAGES: [&str; 3] = [
    "I can see that you're struggling right now, and I want you to know that your feelings are valid and understandable.",
    "It sounds like you're going through a challenging time. Sometimes it helps to talk through these feelings with someone.",
    "I'm here to listen and support you. How long have you been feeling this way?",
];

const NONE_MESSAGES: [&str; 3] = [
    "Thank you for sharing that with me. How are you feeling about the situation?",
    "I appreciate you opening up. What would be most helpful for you right now?",
    "I'm here to listen and support you. What else is on your mind?",
];

/// Candidate messages for a level. Tone escalates with severity; `High`
/// messages acknowledge distress and never end in a question.
pub fn message_pool(level: CrisisLevel) -> &'static [&'static str] {
    match level {
        CrisisLevel::High => &HIGH_MESSAGES,
        CrisisLevel::Medium => &MEDIUM_MESSAGES,
        CrisisLevel::Low => &LOW_MESSAGES,
        CrisisLevel::None => &NONE_MESSAGES,
    }
}

/// Pick a message uniformly at random from the level's pool.
pub fn respond_with<R: Rng + ?Sized>(level: CrisisLevel, rng: &mut R) -> SupportResponse {
    let pool = message_pool(level);
    respond_indexed(level, rng.gen_range(0..pool.len()))
}

/// Deterministic selection: `index` wraps around the pool.
pub fn respond_indexed(level: CrisisLevel, index: usize) -> SupportResponse {
    let pool = message_pool(level);
    SupportResponse {
        message: pool[index % pool.len()].to_string(),
        resources: resource_lines(level),
    }
}

/// Thread-RNG selection for production callers.
pub fn respond(level: CrisisLevel) -> SupportResponse {
    respond_with(level, &mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn every_pool_has_three_messages() {
        for level in CrisisLevel::ALL {
            let pool = message_pool(level);
            assert_eq!(pool.len(), 3, "{level}");
            assert!(pool.iter().all(|m| !m.trim().is_empty()));
        }
    }

    #[test]
    fn high_messages_do_not_ask_questions() {
        for message in message_pool(CrisisLevel::High) {
            assert!(!message.contains('?'), "High message asks a question: {message}");
        }
    }

    #[test]
    fn high_messages_acknowledge_distress() {
        let markers = ["concerned", "difficult", "pain"];
        for message in message_pool(CrisisLevel::High) {
            assert!(
                markers.iter().any(|m| message.contains(m)),
                "High message lacks acknowledgement: {message}"
            );
        }
    }

    #[test]
    fn indexed_selection_wraps() {
        assert_eq!(
            respond_indexed(CrisisLevel::Low, 1).message,
            respond_indexed(CrisisLevel::Low, 4).message
        );
        assert_eq!(respond_indexed(CrisisLevel::None, 0).message, NONE_MESSAGES[0]);
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        for level in CrisisLevel::ALL {
            assert_eq!(respond_with(level, &mut a), respond_with(level, &mut b));
        }
    }

    #[test]
    fn random_selection_stays_in_pool() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let r = respond_with(CrisisLevel::Medium, &mut rng);
            assert!(MEDIUM_MESSAGES.contains(&r.message.as_str()));
        }
    }

    #[test]
    fn response_carries_level_resources() {
        let r = respond(CrisisLevel::High);
        assert!(r.resources.iter().any(|l| l.contains("988")));
        assert!(respond(CrisisLevel::None).resources.is_empty());
    }
}

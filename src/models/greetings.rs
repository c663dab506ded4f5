use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// Canned openers and sign-offs for the chat front-end. Loaded once from
/// `greetings.json`; each list must be non-empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GreetingSet {
    pub greetings: Vec<String>,
    pub farewells: Vec<String>,
    pub thanks_replies: Vec<String>,
}

impl GreetingSet {
    pub fn from_json(s: &str) -> anyhow::Result<Self> {
        let set: GreetingSet = serde_json::from_str(s)?;
        for (field, list) in [
            ("greetings", &set.greetings),
            ("farewells", &set.farewells),
            ("thanks_replies", &set.thanks_replies),
        ] {
            if list.is_empty() {
                return Err(anyhow::anyhow!("greeting list {field} is empty"));
            }
        }
        Ok(set)
    }

    pub fn random_greeting(&self) -> &str {
        pick(&self.greetings)
    }

    pub fn random_farewell(&self) -> &str {
        pick(&self.farewells)
    }

    pub fn random_thanks_reply(&self) -> &str {
        pick(&self.thanks_replies)
    }
}

fn pick(list: &[String]) -> &str {
    // Lists are validated non-empty at construction; the fallback keeps
    // this total anyway.
    list.choose(&mut rand::thread_rng())
        .map(String::as_str)
        .unwrap_or("Hello!")
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"{
        "greetings": ["Hello!", "Hi there!"],
        "farewells": ["Goodbye!"],
        "thanks_replies": ["You're welcome!"]
    }"#;

    #[test]
    fn test_parse_valid_json() {
        let set = GreetingSet::from_json(VALID).unwrap();
        assert_eq!(set.greetings.len(), 2);
        assert_eq!(set.farewells.len(), 1);
    }

    #[test]
    fn test_parse_invalid_json() {
        assert!(GreetingSet::from_json("[]").is_err());
    }

    #[test]
    fn test_empty_list_rejected() {
        let json = r#"{"greetings": [], "farewells": ["Bye"], "thanks_replies": ["np"]}"#;
        assert!(GreetingSet::from_json(json).is_err());
    }

    #[test]
    fn test_picks_come_from_the_lists() {
        let set = GreetingSet::from_json(VALID).unwrap();
        for _ in 0..20 {
            assert!(set.greetings.iter().any(|g| g == set.random_greeting()));
            assert_eq!(set.random_farewell(), "Goodbye!");
            assert_eq!(set.random_thanks_reply(), "You're welcome!");
        }
    }
}

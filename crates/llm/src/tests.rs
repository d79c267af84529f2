use crate::client::truncate;
use crate::prompts::{CHAT_SYSTEM_PROMPT, guide_system_prompt, guide_user_prompt};

#[test]
fn test_truncate_within_limit() {
    assert_eq!(truncate("hello", 10), "hello");
}

#[test]
fn test_truncate_exceeds_limit() {
    assert_eq!(truncate("hello world", 5), "hello");
}

#[test]
fn test_truncate_unicode_boundary() {
    let s = "塞尔达传说";
    let result = truncate(s, 4);
    assert_eq!(result, "塞");
}

#[test]
fn test_guide_prompt_names_the_game() {
    let prompt = guide_system_prompt("Hollow Knight");
    assert!(prompt.contains("guide for the game: Hollow Knight."));
    assert!(prompt.contains("## 🎮 Game Overview"));
    assert!(prompt.contains("## 🔥 Advanced/Completionist Tips"));
    assert_eq!(guide_user_prompt("Hollow Knight"), "Generate a comprehensive guide for: Hollow Knight");
}

#[test]
fn test_chat_prompt_lists_sections() {
    for section in ["Game Overview", "Core Mechanics", "Progression", "Completionist"] {
        assert!(CHAT_SYSTEM_PROMPT.contains(section), "missing section {section}");
    }
}

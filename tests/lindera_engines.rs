//! Integration tests for the built-in Lindera engines.
//!
//! These run against the embedded dictionaries, so each test is gated on the
//! cargo feature that compiles its dictionary in.

#![allow(unused_imports)]

use lexis::Tokenizer;

#[cfg(feature = "japanese")]
#[test]
fn japanese_words_are_morphologically_segmented() {
    let tokenizer = Tokenizer::new("japanese").unwrap();

    let sentences = tokenizer.to_sentences("日本語の形態素解析を行うことができます。").unwrap();
    assert_eq!(sentences.len(), 1);

    let words = tokenizer.to_words(&sentences[0]).unwrap();
    assert!(words.len() >= 5);
    assert_eq!(words[0], "日本");
    assert!(words.iter().all(|w| w != "。"));
}

#[cfg(feature = "chinese")]
#[test]
fn chinese_words_are_dictionary_segmented() {
    let tokenizer = Tokenizer::new("chinese").unwrap();

    let words = tokenizer.to_words("能够进行汉语的形态素解析。").unwrap();
    assert!(words.len() >= 4);
    assert!(words.contains(&"汉语".to_string()));
    assert!(words.iter().all(|w| w != "。"));
}

#[cfg(feature = "korean")]
#[test]
fn korean_sentences_come_from_the_engine() {
    let tokenizer = Tokenizer::new("korean").unwrap();

    let sentences = tokenizer.to_sentences("한국어 문장입니다. 두 번째 문장입니다.").unwrap();
    assert_eq!(sentences.len(), 2);

    let words = tokenizer.to_words(&sentences[0]).unwrap();
    assert!(!words.is_empty());
}

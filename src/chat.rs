//! Canned chat replies.

/// Reply used when no rule matches.
pub const DEFAULT_REPLY: &str = "I'm not sure about that.";

/// Ordered rules; the first rule with any matching keyword wins.
const RULES: &[(&[&str], &str)] = &[
    (
        &["beach cleaning", "motive"],
        "Beach cleaning helps keep marine life safe.",
    ),
    (
        &["register"],
        "You can register on our app to join the event!",
    ),
    (
        &["time", "when"],
        "Our next beach clean-up is this Sunday at 7 AM.",
    ),
];

pub fn reply(message: &str) -> &'static str {
    let message = message.to_lowercase();

    RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| message.contains(k)))
        .map(|(_, reply)| *reply)
        .unwrap_or(DEFAULT_REPLY)
}

use crate::pipeline::Submission;

pub fn check(raw: &str) -> anyhow::Result<()> {
    match Submission::new(raw) {
        Submission::Empty | Submission::Valid { .. } => Ok(()),
        Submission::Invalid(diagnostic) => anyhow::bail!(diagnostic),
    }
}

#[test]
fn accepts_valid_input() {
    assert!(check(r#"{"bla": 42}"#).is_ok());
}

#[test]
fn accepts_empty_input() {
    assert!(check("  \n").is_ok());
}

#[test]
fn rejects_invalid_input_with_decoder_diagnostic() {
    let error = check(r#"{"a":1,}"#).unwrap_err();
    assert_eq!(error.to_string(), "trailing comma at line 1 column 8");
}

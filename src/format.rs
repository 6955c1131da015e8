use crate::pipeline::Submission;

pub fn format(raw: &str) -> anyhow::Result<()> {
    if let Some(pretty) = formatted(raw)? {
        println!("{pretty}");
    }
    Ok(())
}

fn formatted(raw: &str) -> anyhow::Result<Option<String>> {
    match Submission::new(raw) {
        Submission::Empty => Ok(None),
        Submission::Valid { pretty, .. } => Ok(Some(pretty)),
        Submission::Invalid(diagnostic) => anyhow::bail!(diagnostic),
    }
}

#[test]
fn formats_to_canonical_pretty_form() {
    assert_eq!(
        formatted("[1,2]").unwrap(),
        Some("[\n  1,\n  2\n]".to_owned())
    );
}

#[test]
fn empty_input_prints_nothing() {
    assert_eq!(formatted(" ").unwrap(), None);
}

#[test]
fn invalid_input_errors_with_decoder_diagnostic() {
    let error = formatted("[1,").unwrap_err();
    assert_eq!(
        error.to_string(),
        "EOF while parsing a value at line 1 column 3"
    );
}

use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(BurstError::config("x").to_string().contains("config error:"));
    assert!(
        BurstError::base_image("x")
            .to_string()
            .contains("base image error:")
    );
    assert!(
        BurstError::compose("x")
            .to_string()
            .contains("composition error:")
    );
    assert!(
        BurstError::optimize("x")
            .to_string()
            .contains("optimize error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = BurstError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn anyhow_context_converts_with_question_mark() {
    fn read_missing() -> BurstResult<String> {
        use anyhow::Context as _;
        let s = std::fs::read_to_string("target/definitely/not/here.svg")
            .context("read base image")?;
        Ok(s)
    }

    let err = read_missing().unwrap_err();
    assert!(matches!(err, BurstError::Other(_)));
    assert!(err.to_string().contains("read base image"));
}

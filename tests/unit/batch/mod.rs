use super::*;
use crate::{
    compose::base::BaseImage, foundation::config::GenerationConfig, foundation::error::BurstError,
    optimize::Identity,
};
use rand::{SeedableRng, rngs::StdRng};

fn scratch(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("unit_batch").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

fn base() -> BaseImage {
    BaseImage::from_markup(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="8" height="8"><rect width="8" height="8"/></svg>"#,
    )
    .unwrap()
}

#[test]
fn file_names_are_zero_padded() {
    assert_eq!(output_file_name("t", 1), "t_000000001.svg");
    assert_eq!(output_file_name("run", 123_456_789), "run_123456789.svg");
    assert_eq!(output_file_name("x", 1_000_000_000), "x_1000000000.svg");
}

#[test]
fn persist_leaves_only_the_final_file() {
    let dir = scratch("persist");
    let path = persist(&dir, "a_000000001.svg", "<svg/>").unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "<svg/>");
    let names: Vec<_> = std::fs::read_dir(&dir)
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(names, vec![std::ffi::OsString::from("a_000000001.svg")]);
}

#[test]
fn writes_every_sequence_number() {
    let dir = scratch("all");
    let base = base();
    let cfg = GenerationConfig::default();
    let composer = Composer::new(&base, &cfg).unwrap();
    let opts = BatchOpts {
        count: 3,
        prefix: "b".to_owned(),
        out_dir: dir.clone(),
    };
    let report = run_batch(&composer, &Identity, &opts, &mut StdRng::seed_from_u64(1));
    assert!(report.is_complete());
    for seq in 1..=3 {
        assert!(dir.join(output_file_name("b", seq)).is_file());
    }
}

struct Refuse;

impl Optimizer for Refuse {
    fn optimize(&self, _svg: &str) -> BurstResult<String> {
        Err(BurstError::optimize("refused"))
    }
}

#[test]
fn failures_are_recorded_and_skipped() {
    let dir = scratch("refuse");
    let base = base();
    let cfg = GenerationConfig::default();
    let composer = Composer::new(&base, &cfg).unwrap();
    let opts = BatchOpts {
        count: 2,
        prefix: "r".to_owned(),
        out_dir: dir.clone(),
    };
    let report = run_batch(&composer, &Refuse, &opts, &mut StdRng::seed_from_u64(2));
    assert!(report.written.is_empty());
    assert_eq!(
        report.failed.iter().map(|f| f.seq).collect::<Vec<_>>(),
        vec![1, 2]
    );
    assert!(report.failed[0].message.contains("refused"));
    assert!(!dir.join(output_file_name("r", 1)).exists());
}

#[test]
fn zero_count_writes_nothing() {
    let dir = scratch("zero");
    let base = base();
    let cfg = GenerationConfig::default();
    let composer = Composer::new(&base, &cfg).unwrap();
    let opts = BatchOpts {
        count: 0,
        prefix: "z".to_owned(),
        out_dir: dir.clone(),
    };
    let report = run_batch(&composer, &Identity, &opts, &mut StdRng::seed_from_u64(3));
    assert!(report.is_complete());
    assert!(report.written.is_empty());
    assert!(!dir.exists());
}

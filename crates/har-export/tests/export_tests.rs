//! Integration tests for the fixture export pipeline.

use std::collections::HashSet;
use std::path::PathBuf;

use har_export::commands::{DumpFixturesCommand, DumpFixturesOptions};
use har_export::{ExportError, Exporter};
use rstest::rstest;
use tempfile::tempdir;

fn quiet_options(output_dir: impl Into<PathBuf>) -> DumpFixturesOptions {
	DumpFixturesOptions::new()
		.with_output_dir(output_dir)
		.with_verbosity(0)
}

#[rstest]
#[tokio::test]
async fn exported_file_matches_catalog_value() {
	let dir = tempdir().unwrap();
	let exporter = Exporter::new().with_output_dir(dir.path());

	for name in har_catalog::names() {
		let path = exporter.export(name).await.unwrap();
		let parsed: serde_json::Value =
			serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
		assert_eq!(&parsed, har_catalog::get(name).unwrap(), "fixture `{name}`");
	}
}

#[rstest]
#[tokio::test]
async fn export_is_idempotent() {
	let dir = tempdir().unwrap();
	let exporter = Exporter::new().with_output_dir(dir.path());

	let path = exporter.export("full").await.unwrap();
	let first = std::fs::read(&path).unwrap();

	exporter.export("full").await.unwrap();
	let second = std::fs::read(&path).unwrap();

	assert_eq!(first, second);
}

#[rstest]
#[tokio::test]
async fn dump_writes_twenty_distinct_files() {
	let dir = tempdir().unwrap();
	let result = DumpFixturesCommand::new()
		.execute(quiet_options(dir.path()))
		.await;

	assert_eq!(result.written.len(), 20);
	assert!(result.errors.is_empty());

	let distinct: HashSet<_> = result.written.iter().collect();
	assert_eq!(distinct.len(), result.written.len());

	for path in &result.written {
		assert_eq!(path.extension().unwrap(), "har");
		assert!(path.is_file(), "missing {}", path.display());
	}
	assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 20);
}

#[rstest]
#[tokio::test]
async fn missing_output_dir_degrades_per_fixture() {
	let dir = tempdir().unwrap();
	let missing = dir.path().join("missing");

	let result = DumpFixturesCommand::new()
		.execute(quiet_options(&missing))
		.await;

	// Every fixture is still attempted; nothing panics, nothing is written.
	assert!(result.written.is_empty());
	assert_eq!(result.errors.len(), har_catalog::names().len());
	assert!(!missing.exists());
}

#[rstest]
#[tokio::test]
async fn unknown_name_is_reported_not_written() {
	let dir = tempdir().unwrap();
	let exporter = Exporter::new().with_output_dir(dir.path());

	let err = exporter.export("no-such-fixture").await.unwrap_err();
	assert!(matches!(err, ExportError::UnknownFixture(_)));
	assert_eq!(err.to_string(), "Unknown fixture: no-such-fixture");
	assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[rstest]
fn destinations_are_collision_free() {
	let exporter = Exporter::new().with_output_dir("data");

	let destinations: HashSet<PathBuf> = har_catalog::names()
		.iter()
		.map(|name| exporter.destination(name))
		.collect();
	assert_eq!(destinations.len(), har_catalog::names().len());
	assert!(destinations.contains(&PathBuf::from("data/short.har")));
}

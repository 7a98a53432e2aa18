//! Read-only lookup over the embedded captures.
//!
//! The raw documents live under `fixtures/` and are compiled into the binary
//! with `include_str!`. They are parsed exactly once, on first access, into
//! a shared map that is never mutated afterwards.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde_json::Value;

/// Raw fixture sources in catalog order.
///
/// The order here is the canonical iteration order exposed by [`names`] and
/// [`iter`]; consumers that export the catalog walk it front to back.
static FIXTURE_SOURCES: [(&str, &str); 20] = [
	(
		"application-form-encoded",
		include_str!("../fixtures/application-form-encoded.har"),
	),
	(
		"application-json",
		include_str!("../fixtures/application-json.har"),
	),
	(
		"application-zip",
		include_str!("../fixtures/application-zip.har"),
	),
	("cookies", include_str!("../fixtures/cookies.har")),
	("full", include_str!("../fixtures/full.har")),
	("headers", include_str!("../fixtures/headers.har")),
	("https", include_str!("../fixtures/https.har")),
	(
		"image-png-no-filename",
		include_str!("../fixtures/image-png-no-filename.har"),
	),
	("image-png", include_str!("../fixtures/image-png.har")),
	(
		"jsonObj-multiline",
		include_str!("../fixtures/jsonObj-multiline.har"),
	),
	(
		"jsonObj-null-value",
		include_str!("../fixtures/jsonObj-null-value.har"),
	),
	(
		"multipart-data-dataurl",
		include_str!("../fixtures/multipart-data-dataurl.har"),
	),
	(
		"multipart-data",
		include_str!("../fixtures/multipart-data.har"),
	),
	(
		"multipart-file",
		include_str!("../fixtures/multipart-file.har"),
	),
	(
		"multipart-form-data",
		include_str!("../fixtures/multipart-form-data.har"),
	),
	(
		"query-encoded",
		include_str!("../fixtures/query-encoded.har"),
	),
	("query", include_str!("../fixtures/query.har")),
	("short", include_str!("../fixtures/short.har")),
	("text-plain", include_str!("../fixtures/text-plain.har")),
	("xml", include_str!("../fixtures/xml.har")),
];

/// Parsed catalog, populated on first access.
static CATALOG: Lazy<HashMap<&'static str, Value>> = Lazy::new(|| {
	FIXTURE_SOURCES
		.iter()
		.map(|(name, raw)| {
			let value = serde_json::from_str(raw)
				.unwrap_or_else(|err| panic!("embedded fixture `{name}` is not valid JSON: {err}"));
			(*name, value)
		})
		.collect()
});

/// Fixture names in catalog order.
static NAMES: Lazy<Vec<&'static str>> =
	Lazy::new(|| FIXTURE_SOURCES.iter().map(|(name, _)| *name).collect());

/// Returns the fixed, ordered list of fixture names in the catalog.
pub fn names() -> &'static [&'static str] {
	&NAMES
}

/// Looks up the capture for the given fixture name.
///
/// # Arguments
///
/// * `name` - Fixture name (e.g. `"application-json"`)
///
/// # Returns
///
/// Returns the parsed document, or `None` if the name is not part of the
/// catalog. The lookup is pure and has no side effects.
pub fn get(name: &str) -> Option<&'static Value> {
	CATALOG.get(name)
}

/// Checks whether a fixture name is part of the catalog.
pub fn contains(name: &str) -> bool {
	CATALOG.contains_key(name)
}

/// Returns an iterator over `(name, value)` pairs in catalog order.
pub fn iter() -> impl Iterator<Item = (&'static str, &'static Value)> {
	names().iter().map(|name| {
		let value = CATALOG
			.get(name)
			.unwrap_or_else(|| panic!("fixture `{name}` is listed but missing from the catalog"));
		(*name, value)
	})
}

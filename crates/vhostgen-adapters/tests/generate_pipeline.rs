//! Integration tests for the generate pipeline: real service, tera renderer,
//! in-memory filesystem.

use std::path::{Path, PathBuf};

use vhostgen_adapters::{MemoryFilesystem, StaticSiteSource, TeraRenderer};
use vhostgen_core::{
    application::{ApplicationError, GenerateOptions, GenerateService},
    domain::{RawSite, SiteCollection, SiteDocument, UpstreamDocument, UpstreamServer},
    error::VhostgenError,
};

const TEMPLATE: &str = "\
# {{ site_key }}
server_name {{ hostnames | join(sep=\" \") }};
upstream {{ upstream.name }} {
{% for server in upstream.servers %}    server {{ server.host }}:{{ server.port }};
{% endfor %}}
client_max_body_size {{ client_max_body_size }};
force_https={{ force_https }}
";

fn site(hostname: &str, upstream: &str) -> RawSite {
    RawSite::Parsed(SiteDocument {
        hostnames: Some(vec![hostname.to_string()]),
        upstream: Some(UpstreamDocument {
            name: Some(upstream.to_string()),
            servers: Some(vec![UpstreamServer {
                host: "127.0.0.1".into(),
                port: 8080,
            }]),
        }),
        client_max_body_size: None,
        force_https: None,
    })
}

struct Harness {
    _templates: tempfile::TempDir,
    filesystem: MemoryFilesystem,
    service: GenerateService,
}

fn harness(collection: SiteCollection, template: &str) -> Harness {
    let templates = tempfile::tempdir().unwrap();
    std::fs::write(templates.path().join("site.conf.j2"), template).unwrap();

    let filesystem = MemoryFilesystem::new();
    let service = GenerateService::new(
        Box::new(StaticSiteSource::new(collection)),
        Box::new(TeraRenderer::from_dir(templates.path()).unwrap()),
        Box::new(filesystem.clone()),
    );

    Harness {
        _templates: templates,
        filesystem,
        service,
    }
}

fn options() -> GenerateOptions {
    GenerateOptions {
        template_name: "site.conf.j2".into(),
        output_dir: PathBuf::from("/out"),
        clean: false,
        dry_run: false,
    }
}

#[test]
fn every_valid_site_produces_one_file() {
    let mut collection = SiteCollection::new();
    collection.push("a", site("a.example.com", "a_up"));
    collection.push("b", site("b.example.com", "b_up"));

    let h = harness(collection, TEMPLATE);
    let report = h.service.generate(&options()).unwrap();

    assert_eq!(report.written.len(), 2);
    assert!(report.skipped.is_empty());
    assert_eq!(
        h.filesystem.list_files(),
        vec![
            PathBuf::from("/out/a.example.com.conf"),
            PathBuf::from("/out/b.example.com.conf"),
        ]
    );

    let content = h
        .filesystem
        .read_file(Path::new("/out/a.example.com.conf"))
        .unwrap();
    assert!(content.contains("# a"));
    assert!(content.contains("server_name a.example.com;"));
    assert!(content.contains("upstream a_up {"));
    assert!(content.contains("client_max_body_size 1M;"));
    assert!(content.contains("force_https=false"));
}

#[test]
fn invalid_site_is_skipped_without_aborting() {
    let mut collection = SiteCollection::new();
    collection.push(
        "broken",
        RawSite::Parsed(SiteDocument {
            hostnames: Some(vec!["broken.example.com".into()]),
            ..SiteDocument::default()
        }),
    );
    collection.push("ok", site("ok.example.com", "ok_up"));

    let h = harness(collection, TEMPLATE);
    let report = h.service.generate(&options()).unwrap();

    assert_eq!(report.skipped, vec!["broken".to_string()]);
    assert_eq!(
        h.filesystem.list_files(),
        vec![PathBuf::from("/out/ok.example.com.conf")]
    );
}

#[test]
fn render_failure_skips_only_that_site() {
    // Referencing a parameter outside the documented set fails at render
    // time, after validation has already passed.
    let mut collection = SiteCollection::new();
    collection.push("a", site("a.example.com", "a_up"));

    let h = harness(collection, "{{ undefined_parameter }}");
    let report = h.service.generate(&options()).unwrap();

    assert_eq!(report.skipped, vec!["a".to_string()]);
    assert!(h.filesystem.list_files().is_empty());
}

#[test]
fn missing_template_is_fatal_before_any_write() {
    let mut collection = SiteCollection::new();
    collection.push("a", site("a.example.com", "a_up"));

    let h = harness(collection, TEMPLATE);
    let mut opts = options();
    opts.template_name = "other.conf.j2".into();

    let err = h.service.generate(&opts).unwrap_err();
    assert!(matches!(
        err,
        VhostgenError::Application(ApplicationError::TemplateNotFound { .. })
    ));
    assert!(h.filesystem.list_files().is_empty());
}

#[test]
fn clean_pass_removes_stale_configs_even_for_failing_sites() {
    // Stale output from a previous run: one for a site that no longer
    // exists, one for a site that now fails validation.
    let mut collection = SiteCollection::new();
    collection.push(
        "now-broken",
        RawSite::Parsed(SiteDocument {
            hostnames: Some(vec!["now-broken.example.com".into()]),
            ..SiteDocument::default()
        }),
    );
    collection.push("kept", site("kept.example.com", "kept_up"));

    let h = harness(collection, TEMPLATE);
    h.filesystem.seed_file("/out/removed.example.com.conf", "stale");
    h.filesystem
        .seed_file("/out/now-broken.example.com.conf", "stale");
    h.filesystem.seed_file("/out/readme.txt", "not a config");

    let mut opts = options();
    opts.clean = true;
    let report = h.service.generate(&opts).unwrap();

    assert_eq!(report.cleaned, 2);
    // The failing site's previous output is gone with nothing to replace it.
    assert_eq!(
        h.filesystem.list_files(),
        vec![
            PathBuf::from("/out/kept.example.com.conf"),
            PathBuf::from("/out/readme.txt"),
        ]
    );
}

#[test]
fn without_clean_stale_configs_survive() {
    let mut collection = SiteCollection::new();
    collection.push("a", site("a.example.com", "a_up"));

    let h = harness(collection, TEMPLATE);
    h.filesystem.seed_file("/out/stale.example.com.conf", "stale");

    let report = h.service.generate(&options()).unwrap();
    assert_eq!(report.cleaned, 0);
    assert!(
        h.filesystem
            .read_file(Path::new("/out/stale.example.com.conf"))
            .is_some()
    );
}

#[test]
fn rerun_is_byte_for_byte_idempotent() {
    let mut collection = SiteCollection::new();
    collection.push("a", site("a.example.com", "a_up"));

    let h = harness(collection, TEMPLATE);
    h.service.generate(&options()).unwrap();
    let first = h
        .filesystem
        .read_file(Path::new("/out/a.example.com.conf"))
        .unwrap();

    h.service.generate(&options()).unwrap();
    let second = h
        .filesystem
        .read_file(Path::new("/out/a.example.com.conf"))
        .unwrap();

    assert_eq!(first, second);
}

#[test]
fn dry_run_renders_but_touches_nothing() {
    let mut collection = SiteCollection::new();
    collection.push("a", site("a.example.com", "a_up"));

    let h = harness(collection, TEMPLATE);
    h.filesystem.seed_file("/out/stale.example.com.conf", "stale");

    let mut opts = options();
    opts.clean = true;
    opts.dry_run = true;
    let report = h.service.generate(&opts).unwrap();

    // The report says what would happen; the filesystem is untouched.
    assert_eq!(report.written, vec![PathBuf::from("/out/a.example.com.conf")]);
    assert_eq!(report.cleaned, 1);
    assert_eq!(
        h.filesystem.list_files(),
        vec![PathBuf::from("/out/stale.example.com.conf")]
    );
}

#[test]
fn empty_collection_completes_with_no_output() {
    let h = harness(SiteCollection::new(), TEMPLATE);
    let report = h.service.generate(&options()).unwrap();

    assert!(report.written.is_empty());
    assert!(report.skipped.is_empty());
    assert!(h.filesystem.list_files().is_empty());
}

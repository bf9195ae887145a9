mod common;

use chrono::{TimeZone, Utc};
use common::{heterozygous_vcf, write_gzip, write_plain};
use genome_fingerprint::{
    find_duplicates, verify, FingerprintConfig, Fingerprinter, InMemoryRegistry, RegistryRecord,
    Verdict,
};

fn record(owner: &str) -> RegistryRecord {
    RegistryRecord {
        owner: owner.to_string(),
        created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        storage_location: "s3://bucket/sample.vcf.gz".to_string(),
        biocid: None,
    }
}

#[test]
fn recompressed_upload_is_reported_as_duplicate() {
    let dir = tempfile::tempdir().unwrap();
    let vcf = heterozygous_vcf(80);
    let original = write_gzip(dir.path(), "original.vcf.gz", &vcf);
    let reupload = write_plain(dir.path(), "reupload.vcf", &vcf);

    let fp = Fingerprinter::new(FingerprintConfig::default()).unwrap();
    let registered = fp.fingerprint_path(&original).unwrap();

    let mut registry = InMemoryRegistry::new();
    registry.register(registered.fingerprint, record("0xabc"));

    let candidate = fp.fingerprint_path(&reupload).unwrap();
    let report = find_duplicates(&registry, &candidate.fingerprint).unwrap();
    assert!(report.is_duplicate());
    assert_eq!(report.duplicates, vec![record("0xabc")]);
}

#[test]
fn distinct_content_is_not_a_duplicate() {
    let fp = Fingerprinter::new(FingerprintConfig::default()).unwrap();
    let mut registry = InMemoryRegistry::new();
    let registered = fp
        .fingerprint_reader(heterozygous_vcf(80).as_bytes())
        .unwrap();
    registry.register(registered.fingerprint, record("0xabc"));

    let other = fp
        .fingerprint_reader(heterozygous_vcf(81).as_bytes())
        .unwrap();
    let report = find_duplicates(&registry, &other.fingerprint).unwrap();
    assert!(!report.is_duplicate());
}

#[test]
fn verify_after_transfer() {
    let fp = Fingerprinter::new(FingerprintConfig::default()).unwrap();
    let vcf = heterozygous_vcf(50);
    let before = fp.fingerprint_reader(vcf.as_bytes()).unwrap().fingerprint;

    let intact: genome_fingerprint::Fingerprint = before.to_hex().parse().unwrap();
    let after = fp.fingerprint_reader(vcf.as_bytes()).unwrap().fingerprint;
    assert_eq!(verify(&after, &intact), Verdict::Verified);

    let corrupted = vcf.replacen("0/1:25", "1/1:25", 1);
    let damaged = fp.fingerprint_reader(corrupted.as_bytes()).unwrap().fingerprint;
    assert_eq!(verify(&damaged, &intact), Verdict::Mismatch);
}

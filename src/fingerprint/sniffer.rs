//! Format classification from the leading lines of a file.

use crate::types::FileFormat;

const PROVIDER_MARKERS: &[&str] = &[
    "23andme",
    "ancestrydna",
    "familytreedna",
    "myheritage",
    "living dna",
];

/// What made the sniffer settle on a format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evidence {
    VariantCallHeader,
    ProviderMarker,
    RsidHeader,
    RsidLine,
    /// Nothing matched; the permissive consumer extractor gets a try anyway.
    Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sniffed {
    pub format: FileFormat,
    pub evidence: Evidence,
}

impl Sniffed {
    pub fn is_fallback(&self) -> bool {
        self.evidence == Evidence::Fallback
    }
}

/// Classify a file from its first lines.
///
/// Variant-call headers win over any consumer marker. Files matching neither
/// are reported as consumer genotype with [`Evidence::Fallback`].
pub fn sniff<S: AsRef<str>>(lines: &[S]) -> Sniffed {
    let lines = &lines[..lines.len().min(super::input::SNIFF_LINES)];

    if lines.iter().any(|line| is_variant_call_header(line.as_ref())) {
        return Sniffed {
            format: FileFormat::VariantCall,
            evidence: Evidence::VariantCallHeader,
        };
    }

    for line in lines {
        let line = line.as_ref();
        let evidence = if has_provider_marker(line) {
            Some(Evidence::ProviderMarker)
        } else if is_rsid_header(line) {
            Some(Evidence::RsidHeader)
        } else if is_rsid_line(line) {
            Some(Evidence::RsidLine)
        } else {
            None
        };

        if let Some(evidence) = evidence {
            return Sniffed {
                format: FileFormat::ConsumerGenotype,
                evidence,
            };
        }
    }

    Sniffed {
        format: FileFormat::ConsumerGenotype,
        evidence: Evidence::Fallback,
    }
}

fn is_variant_call_header(line: &str) -> bool {
    line.starts_with("##fileformat=VCF") || line.starts_with("#CHROM")
}

fn has_provider_marker(line: &str) -> bool {
    let lower = line.to_ascii_lowercase();
    PROVIDER_MARKERS.iter().any(|marker| lower.contains(marker))
}

// "# rsid\tchromosome...", "rsid\tchromosome..." or "RSID,CHROMOSOME,..."
fn is_rsid_header(line: &str) -> bool {
    let stripped = line
        .trim_start_matches('#')
        .trim_start()
        .trim_start_matches('"');
    stripped
        .get(..4)
        .is_some_and(|head| head.eq_ignore_ascii_case("rsid"))
}

fn is_rsid_line(line: &str) -> bool {
    let mut fields = line.split('\t');
    match (fields.next(), fields.next()) {
        (Some(first), Some(_)) => is_rsid(first),
        _ => false,
    }
}

pub(crate) fn is_rsid(token: &str) -> bool {
    token
        .strip_prefix("rs")
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
}

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Classification of an input file, as resolved by the format sniffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileFormat {
    /// VCF-like variant calls with per-sample columns.
    VariantCall,
    /// Consumer genotype exports (23andMe, AncestryDNA, FamilyTreeDNA, ...).
    ConsumerGenotype,
    Unsupported,
}

impl FileFormat {
    pub fn name(&self) -> &'static str {
        match self {
            FileFormat::VariantCall => "variant-call",
            FileFormat::ConsumerGenotype => "consumer-genotype",
            FileFormat::Unsupported => "unsupported",
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One observed variant position for a single sample.
///
/// Records only live between extraction and insertion into the membership
/// filter; nothing here is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnpRecord {
    pub chromosome: String,
    /// 1-based coordinate on `chromosome`.
    pub position: u64,
    /// rsid when known, otherwise `{chrom}:{pos}_{ref}>{alt}`.
    pub variant_label: String,
    pub genotype: String,
    pub reference_allele: String,
    pub alternate_allele: String,
}

impl SnpRecord {
    pub fn from_variant_call(
        chromosome: &str,
        position: u64,
        id: Option<&str>,
        genotype: &str,
        reference_allele: &str,
        alternate_allele: &str,
    ) -> Self {
        let variant_label = match id {
            Some(id) => id.to_string(),
            None => format!(
                "{}:{}_{}>{}",
                chromosome, position, reference_allele, alternate_allele
            ),
        };

        SnpRecord {
            chromosome: chromosome.to_string(),
            position,
            variant_label,
            genotype: genotype.to_string(),
            reference_allele: reference_allele.to_string(),
            alternate_allele: alternate_allele.to_string(),
        }
    }

    /// Consumer exports carry no ref/alt detail, so both alleles stay empty.
    pub fn from_consumer(rsid: &str, chromosome: &str, position: u64, genotype: &str) -> Self {
        SnpRecord {
            chromosome: chromosome.to_string(),
            position,
            variant_label: rsid.to_string(),
            genotype: genotype.to_string(),
            reference_allele: String::new(),
            alternate_allele: String::new(),
        }
    }

    /// Key inserted into the membership filter for every selected SNP.
    pub fn insertion_key(&self) -> String {
        format!(
            "{}:{}:{}:{}:{}",
            self.chromosome,
            self.position,
            self.genotype,
            self.reference_allele,
            self.alternate_allele
        )
    }

    /// Lexicographic chromosome label, then ascending position.
    pub fn genome_order(&self, other: &Self) -> Ordering {
        self.chromosome
            .cmp(&other.chromosome)
            .then(self.position.cmp(&other.position))
    }
}

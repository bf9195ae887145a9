//! Fixed consumer-genotype marker panel.
//!
//! Markers are common, well-typed autosomal and pigmentation/metabolism SNPs
//! present on every mainstream consumer genotyping array, so two exports from
//! different vendors still share the same candidate set.

use std::collections::HashSet;
use std::sync::OnceLock;

pub const MARKER_PANEL: &[&str] = &[
    "rs4477212",
    "rs3094315",
    "rs3131972",
    "rs12124819",
    "rs11240777",
    "rs6681049",
    "rs4970383",
    "rs4475691",
    "rs7537756",
    "rs13302982",
    "rs1110052",
    "rs2272756",
    "rs3748597",
    "rs13303106",
    "rs28415373",
    "rs1426654",
    "rs16891982",
    "rs12913832",
    "rs1800407",
    "rs4988235",
    "rs713598",
    "rs17822931",
    "rs1805007",
    "rs1805008",
    "rs1042522",
    "rs429358",
    "rs7412",
    "rs53576",
    "rs1815739",
    "rs762551",
    "rs4680",
    "rs1801133",
    "rs671",
    "rs1229984",
    "rs2814778",
    "rs3827760",
    "rs12821256",
    "rs1805009",
    "rs2228479",
    "rs885479",
    "rs1393350",
    "rs12896399",
    "rs1545397",
    "rs6119471",
    "rs2402130",
    "rs7495174",
    "rs4778241",
    "rs1129038",
    "rs1667394",
    "rs1800414",
];

fn panel_set() -> &'static HashSet<&'static str> {
    static PANEL: OnceLock<HashSet<&'static str>> = OnceLock::new();
    PANEL.get_or_init(|| MARKER_PANEL.iter().copied().collect())
}

pub fn in_panel(label: &str) -> bool {
    panel_set().contains(label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_has_no_duplicates() {
        assert_eq!(panel_set().len(), MARKER_PANEL.len());
        assert_eq!(MARKER_PANEL.len(), 50);
    }

    #[test]
    fn membership() {
        assert!(in_panel("rs4477212"));
        assert!(!in_panel("rs0"));
    }
}

#![allow(dead_code)]

use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const BASES: [&str; 4] = ["A", "C", "G", "T"];

/// Single-sample VCF with `count` PASS heterozygous SNVs spread over chr1..chr3.
pub fn heterozygous_vcf(count: usize) -> String {
    let mut vcf = String::from(
        "##fileformat=VCFv4.2\n\
         ##FORMAT=<ID=GT,Number=1,Type=String,Description=\"Genotype\">\n\
         ##FORMAT=<ID=DP,Number=1,Type=Integer,Description=\"Read depth\">\n\
         #CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT\tSAMPLE1\n",
    );
    for i in 0..count {
        let chrom = (i % 3) + 1;
        let pos = 10_000 + i * 137;
        let reference = BASES[i % 4];
        let alternate = BASES[(i + 1) % 4];
        vcf.push_str(&format!(
            "{}\t{}\trs{}\t{}\t{}\t60\tPASS\t.\tGT:DP\t0/1:25\n",
            chrom,
            pos,
            100_000 + i,
            reference,
            alternate
        ));
    }
    vcf
}

/// 23andMe-style export with `count` called genotypes.
pub fn twenty_three_and_me(count: usize) -> String {
    let mut text = String::from(
        "# This data file generated by 23andMe at: Thu Jan 04 10:00:00 2024\n\
         # rsid\tchromosome\tposition\tgenotype\n",
    );
    for i in 0..count {
        text.push_str(&format!(
            "rs{}\t{}\t{}\t{}{}\n",
            200_000 + i,
            (i % 22) + 1,
            50_000 + i * 311,
            BASES[i % 4],
            BASES[(i / 4) % 4]
        ));
    }
    text
}

/// The same genotypes as [`twenty_three_and_me`], in AncestryDNA's layout.
pub fn ancestry(count: usize) -> String {
    let mut text = String::from(
        "#AncestryDNA raw data download\n\
         rsid\tchromosome\tposition\tallele1\tallele2\n",
    );
    for i in 0..count {
        text.push_str(&format!(
            "rs{}\t{}\t{}\t{}\t{}\n",
            200_000 + i,
            (i % 22) + 1,
            50_000 + i * 311,
            BASES[i % 4],
            BASES[(i / 4) % 4]
        ));
    }
    text
}

pub fn write_plain(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

pub fn write_gzip(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    let file = std::fs::File::create(&path).unwrap();
    let mut encoder = GzEncoder::new(file, Compression::default());
    encoder.write_all(content.as_bytes()).unwrap();
    encoder.finish().unwrap();
    path
}

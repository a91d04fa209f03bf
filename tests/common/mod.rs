//! テスト用の画像フィクスチャ
//!
//! imageクレートでJPEG/PNGを生成し、手組みのEXIF（TIFF）ブロックを差し込む。

#![allow(dead_code)]

use image::{DynamicImage, ImageFormat};
use std::io::Cursor;
use std::path::{Path, PathBuf};

const TAG_DATE_TIME: u16 = 0x0132;
const TAG_ORIENTATION: u16 = 0x0112;
const TYPE_ASCII: u16 = 2;
const TYPE_SHORT: u16 = 3;

/// 0th IFDにDateTimeだけを持つリトルエンディアンTIFF
pub fn tiff_with_date(date: &str) -> Vec<u8> {
    let mut value = date.as_bytes().to_vec();
    value.push(0);
    assert!(value.len() > 4, "inline ASCII values are not supported here");

    // header(8) + count(2) + entry(12) + next(4)
    let value_offset: u32 = 8 + 2 + 12 + 4;

    let mut tiff = tiff_header();
    tiff.extend(1u16.to_le_bytes());
    tiff.extend(TAG_DATE_TIME.to_le_bytes());
    tiff.extend(TYPE_ASCII.to_le_bytes());
    tiff.extend((value.len() as u32).to_le_bytes());
    tiff.extend(value_offset.to_le_bytes());
    tiff.extend(0u32.to_le_bytes());
    tiff.extend(value);
    tiff
}

/// DateTimeを含まないTIFF（Orientationのみ）
pub fn tiff_without_date() -> Vec<u8> {
    let mut tiff = tiff_header();
    tiff.extend(1u16.to_le_bytes());
    tiff.extend(TAG_ORIENTATION.to_le_bytes());
    tiff.extend(TYPE_SHORT.to_le_bytes());
    tiff.extend(1u32.to_le_bytes());
    tiff.extend([1, 0, 0, 0]);
    tiff.extend(0u32.to_le_bytes());
    tiff
}

fn tiff_header() -> Vec<u8> {
    let mut header = b"II".to_vec();
    header.extend(42u16.to_le_bytes());
    header.extend(8u32.to_le_bytes());
    header
}

fn encode(format: ImageFormat) -> Vec<u8> {
    let mut buf = Vec::new();
    DynamicImage::new_rgb8(4, 4)
        .write_to(&mut Cursor::new(&mut buf), format)
        .expect("画像のエンコードに失敗");
    buf
}

/// SOI直後にAPP1(Exif)セグメントを挿入したJPEG
pub fn jpeg_bytes(tiff: Option<Vec<u8>>) -> Vec<u8> {
    let mut jpeg = encode(ImageFormat::Jpeg);

    if let Some(tiff) = tiff {
        let mut segment = vec![0xFF, 0xE1];
        segment.extend(((2 + 6 + tiff.len()) as u16).to_be_bytes());
        segment.extend(b"Exif\0\0");
        segment.extend(tiff);
        jpeg.splice(2..2, segment);
    }

    jpeg
}

/// IHDR直後にeXIfチャンクを挿入したPNG
pub fn png_bytes(tiff: Option<Vec<u8>>) -> Vec<u8> {
    let mut png = encode(ImageFormat::Png);

    if let Some(tiff) = tiff {
        let mut body = b"eXIf".to_vec();
        body.extend(tiff);

        let mut chunk = ((body.len() - 4) as u32).to_be_bytes().to_vec();
        chunk.extend(&body);
        chunk.extend(crc32(&body).to_be_bytes());

        // signature(8) + IHDR(4 + 4 + 13 + 4)
        png.splice(33..33, chunk);
    }

    png
}

fn crc32(bytes: &[u8]) -> u32 {
    let mut crc = 0xFFFF_FFFFu32;
    for &b in bytes {
        crc ^= b as u32;
        for _ in 0..8 {
            let mask = (crc & 1).wrapping_neg();
            crc = (crc >> 1) ^ (0xEDB8_8320 & mask);
        }
    }
    !crc
}

pub fn write_jpeg(dir: &Path, name: &str, date: Option<&str>) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, jpeg_bytes(date.map(tiff_with_date))).unwrap();
    path
}

pub fn write_png(dir: &Path, name: &str, date: Option<&str>) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, png_bytes(date.map(tiff_with_date))).unwrap();
    path
}

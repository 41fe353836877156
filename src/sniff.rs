//! Content-type detection from a byte prefix.
//!
//! Detection looks only at the leading bytes of a file, never at its name. The
//! rule table follows the web "MIME sniffing" signatures: markup openers first,
//! then exact and masked magic numbers, then an ISO media box check, and
//! finally a plain-text test that rejects binary control bytes. Anything left
//! over is reported as [`OCTET_STREAM`].

/// Maximum number of leading bytes the detector considers.
pub const SNIFF_LEN: usize = 512;

/// Fallback for unrecognised or empty content.
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Generic text type, assigned to any sample free of binary control bytes.
pub const PLAIN_TEXT: &str = "text/plain; charset=utf-8";

const HTML: &str = "text/html; charset=utf-8";

/// How a rule inspects the sample.
enum Matcher {
	/// Case-insensitive tag opener after leading whitespace, followed by a space or `>`.
	Html(&'static [u8]),
	/// Byte-wise `sample[i] & mask[i] == pattern[i]`.
	Masked {
		mask: &'static [u8],
		pattern: &'static [u8],
		skip_whitespace: bool,
	},
	/// Literal prefix.
	Exact(&'static [u8]),
	/// ISO base media file with an `mp4` brand in its `ftyp` box.
	Mp4,
	/// No binary control bytes anywhere after leading whitespace.
	Text,
}

struct Rule {
	matcher: Matcher,
	content_type: &'static str,
}

const fn html(tag: &'static [u8]) -> Rule {
	Rule {
		matcher: Matcher::Html(tag),
		content_type: HTML,
	}
}

const fn exact(prefix: &'static [u8], content_type: &'static str) -> Rule {
	Rule {
		matcher: Matcher::Exact(prefix),
		content_type,
	}
}

const fn masked(mask: &'static [u8], pattern: &'static [u8], content_type: &'static str) -> Rule {
	Rule {
		matcher: Matcher::Masked {
			mask,
			pattern,
			skip_whitespace: false,
		},
		content_type,
	}
}

const RIFF_MASK: &[u8] = b"\xFF\xFF\xFF\xFF\x00\x00\x00\x00\xFF\xFF\xFF\xFF";

const EOT_MASK: &[u8] = b"\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\xFF\xFF";
const EOT_PATTERN: &[u8] = b"\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00LP";

static RULES: &[Rule] = &[
	html(b"<!DOCTYPE HTML"),
	html(b"<HTML"),
	html(b"<HEAD"),
	html(b"<SCRIPT"),
	html(b"<IFRAME"),
	html(b"<H1"),
	html(b"<DIV"),
	html(b"<FONT"),
	html(b"<TABLE"),
	html(b"<A"),
	html(b"<STYLE"),
	html(b"<TITLE"),
	html(b"<B"),
	html(b"<BODY"),
	html(b"<BR"),
	html(b"<P"),
	html(b"<!--"),
	Rule {
		matcher: Matcher::Masked {
			mask: b"\xFF\xFF\xFF\xFF\xFF",
			pattern: b"<?xml",
			skip_whitespace: true,
		},
		content_type: "text/xml; charset=utf-8",
	},
	exact(b"%PDF-", "application/pdf"),
	exact(b"%!PS-Adobe-", "application/postscript"),
	// Byte order marks. The masks span four bytes, so shorter samples never match.
	masked(b"\xFF\xFF\x00\x00", b"\xFE\xFF\x00\x00", "text/plain; charset=utf-16be"),
	masked(b"\xFF\xFF\x00\x00", b"\xFF\xFE\x00\x00", "text/plain; charset=utf-16le"),
	masked(b"\xFF\xFF\xFF\x00", b"\xEF\xBB\xBF\x00", PLAIN_TEXT),
	// Images.
	exact(b"\x00\x00\x01\x00", "image/x-icon"),
	exact(b"\x00\x00\x02\x00", "image/x-icon"),
	exact(b"BM", "image/bmp"),
	exact(b"GIF87a", "image/gif"),
	exact(b"GIF89a", "image/gif"),
	masked(
		b"\xFF\xFF\xFF\xFF\x00\x00\x00\x00\xFF\xFF\xFF\xFF\xFF\xFF",
		b"RIFF\x00\x00\x00\x00WEBPVP",
		"image/webp",
	),
	exact(b"\x89PNG\x0D\x0A\x1A\x0A", "image/png"),
	exact(b"\xFF\xD8\xFF", "image/jpeg"),
	// Audio and video.
	masked(RIFF_MASK, b"FORM\x00\x00\x00\x00AIFF", "audio/aiff"),
	exact(b"ID3", "audio/mpeg"),
	exact(b"OggS\x00", "application/ogg"),
	exact(b"MThd\x00\x00\x00\x06", "audio/midi"),
	masked(RIFF_MASK, b"RIFF\x00\x00\x00\x00AVI ", "video/avi"),
	masked(RIFF_MASK, b"RIFF\x00\x00\x00\x00WAVE", "audio/wave"),
	Rule {
		matcher: Matcher::Mp4,
		content_type: "video/mp4",
	},
	exact(b"\x1A\x45\xDF\xA3", "video/webm"),
	// Fonts.
	masked(EOT_MASK, EOT_PATTERN, "application/vnd.ms-fontobject"),
	exact(b"\x00\x01\x00\x00", "font/ttf"),
	exact(b"OTTO", "font/otf"),
	exact(b"ttcf", "font/collection"),
	exact(b"wOFF", "font/woff"),
	exact(b"wOF2", "font/woff2"),
	// Archives.
	exact(b"\x1F\x8B\x08", "application/x-gzip"),
	exact(b"PK\x03\x04", "application/zip"),
	exact(b"Rar!\x1A\x07\x00", "application/x-rar-compressed"),
	exact(b"Rar!\x1A\x07\x01\x00", "application/x-rar-compressed"),
	exact(b"\x00\x61\x73\x6D", "application/wasm"),
	Rule {
		matcher: Matcher::Text,
		content_type: PLAIN_TEXT,
	},
];

/// Infer a MIME-style content type from the leading bytes of a file.
///
/// Only the first [`SNIFF_LEN`] bytes are considered. An empty sample yields
/// [`OCTET_STREAM`].
#[must_use]
pub fn sniff(sample: &[u8]) -> &'static str {
	let sample = &sample[..sample.len().min(SNIFF_LEN)];
	if sample.is_empty() {
		return OCTET_STREAM;
	}

	RULES
		.iter()
		.find(|rule| rule.matcher.matches(sample))
		.map_or(OCTET_STREAM, |rule| rule.content_type)
}

impl Matcher {
	fn matches(&self, sample: &[u8]) -> bool {
		match self {
			Self::Html(tag) => matches_html(skip_whitespace(sample), tag),
			Self::Masked {
				mask,
				pattern,
				skip_whitespace: skip,
			} => {
				let data = if *skip {
					skip_whitespace(sample)
				} else {
					sample
				};
				matches_masked(data, mask, pattern)
			}
			Self::Exact(prefix) => sample.starts_with(prefix),
			Self::Mp4 => matches_mp4(sample),
			Self::Text => !skip_whitespace(sample).iter().copied().any(is_binary_byte),
		}
	}
}

fn is_whitespace(byte: u8) -> bool {
	matches!(byte, b'\t' | b'\n' | b'\x0c' | b'\r' | b' ')
}

fn skip_whitespace(sample: &[u8]) -> &[u8] {
	let start = sample
		.iter()
		.position(|byte| !is_whitespace(*byte))
		.unwrap_or(sample.len());
	&sample[start..]
}

fn is_binary_byte(byte: u8) -> bool {
	matches!(byte, 0x00..=0x08 | 0x0B | 0x0E..=0x1A | 0x1C..=0x1F)
}

fn matches_html(data: &[u8], tag: &[u8]) -> bool {
	let Some(head) = data.get(..tag.len()) else {
		return false;
	};
	let Some(&terminator) = data.get(tag.len()) else {
		return false;
	};
	let opener_matches = tag.iter().zip(head).all(|(&expected, &actual)| {
		if expected.is_ascii_uppercase() {
			expected == actual & 0xDF
		} else {
			expected == actual
		}
	});
	opener_matches && matches!(terminator, b' ' | b'>')
}

fn matches_masked(data: &[u8], mask: &[u8], pattern: &[u8]) -> bool {
	if mask.len() != pattern.len() || data.len() < pattern.len() {
		return false;
	}
	data.iter()
		.zip(mask)
		.zip(pattern)
		.all(|((&byte, &bits), &expected)| byte & bits == expected)
}

fn matches_mp4(data: &[u8]) -> bool {
	let Some(size_bytes) = data.get(..4) else {
		return false;
	};
	if data.len() < 12 {
		return false;
	}
	let mut size = [0u8; 4];
	size.copy_from_slice(size_bytes);
	let box_size = u32::from_be_bytes(size) as usize;
	if data.len() < box_size || box_size % 4 != 0 {
		return false;
	}
	if data.get(4..8) != Some(b"ftyp".as_slice()) {
		return false;
	}
	// Brands sit at 4-byte offsets after the box header; offset 12 is the minor version.
	(8..box_size)
		.step_by(4)
		.filter(|offset| *offset != 12)
		.any(|offset| data.get(offset..offset + 3) == Some(b"mp4".as_slice()))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_sample_falls_back_to_octet_stream() {
		assert_eq!(sniff(b""), OCTET_STREAM);
	}

	#[test]
	fn plain_ascii_is_generic_text_regardless_of_shape() {
		assert_eq!(sniff(br#"{"name":"alice"}"#), PLAIN_TEXT);
		assert_eq!(sniff(b"hello world\n"), PLAIN_TEXT);
		assert_eq!(sniff("caf\u{e9} na\u{ef}ve".as_bytes()), PLAIN_TEXT);
	}

	#[test]
	fn control_bytes_mark_content_as_binary() {
		assert_eq!(sniff(b"abc\x00def"), OCTET_STREAM);
		assert_eq!(sniff(b"\x01\x02\x03"), OCTET_STREAM);
		// Escape (0x1B) is allowed in text.
		assert_eq!(sniff(b"\x1b[31mred\x1b[0m"), PLAIN_TEXT);
	}

	#[test]
	fn html_openers_are_case_insensitive_and_need_a_terminator() {
		assert_eq!(sniff(b"  \n<!doctype html><html></html>"), HTML);
		assert_eq!(sniff(b"<Body>"), HTML);
		assert_eq!(sniff(b"<p class=\"x\">"), HTML);
		assert_eq!(sniff(b"<!-- comment -->"), HTML);
		// `<pre>` is not an opener for `<P`, and a bare tag needs a following byte.
		assert_eq!(sniff(b"<pre>"), PLAIN_TEXT);
		assert_eq!(sniff(b"<html"), PLAIN_TEXT);
	}

	#[test]
	fn xml_declaration_after_whitespace() {
		assert_eq!(
			sniff(b"\r\n<?xml version=\"1.0\"?><root/>"),
			"text/xml; charset=utf-8"
		);
	}

	#[test]
	fn document_and_image_signatures() {
		assert_eq!(sniff(b"%PDF-1.7\n"), "application/pdf");
		assert_eq!(sniff(b"%!PS-Adobe-3.0"), "application/postscript");
		assert_eq!(sniff(b"\x89PNG\r\n\x1a\n\x00\x00\x00\rIHDR"), "image/png");
		assert_eq!(sniff(b"\xFF\xD8\xFF\xE0\x00\x10JFIF"), "image/jpeg");
		assert_eq!(sniff(b"GIF89a\x01\x00"), "image/gif");
		assert_eq!(sniff(b"BM\x36\x00"), "image/bmp");
		assert_eq!(sniff(b"RIFF\x24\x00\x00\x00WEBPVP8 "), "image/webp");
	}

	#[test]
	fn audio_video_and_archive_signatures() {
		assert_eq!(sniff(b"RIFF\x24\x08\x00\x00WAVEfmt "), "audio/wave");
		assert_eq!(sniff(b"RIFF\x24\x08\x00\x00AVI LIST"), "video/avi");
		assert_eq!(sniff(b"ID3\x04\x00"), "audio/mpeg");
		assert_eq!(sniff(b"OggS\x00\x02"), "application/ogg");
		assert_eq!(sniff(b"\x1F\x8B\x08\x00\x00"), "application/x-gzip");
		assert_eq!(sniff(b"PK\x03\x04\x14\x00"), "application/zip");
		assert_eq!(sniff(b"Rar!\x1A\x07\x01\x00"), "application/x-rar-compressed");
		assert_eq!(sniff(b"\x00asm\x01\x00\x00\x00"), "application/wasm");
		assert_eq!(sniff(b"wOF2\x00\x01"), "font/woff2");
	}

	#[test]
	fn mp4_requires_ftyp_box_with_mp4_brand() {
		let mut mp4 = Vec::new();
		mp4.extend_from_slice(&24u32.to_be_bytes());
		mp4.extend_from_slice(b"ftypisom\x00\x00\x02\x00isommp41");
		assert_eq!(sniff(&mp4), "video/mp4");

		let mut other = Vec::new();
		other.extend_from_slice(&16u32.to_be_bytes());
		other.extend_from_slice(b"ftypqt  \x00\x00\x02\x00");
		assert_ne!(sniff(&other), "video/mp4");
	}

	#[test]
	fn byte_order_marks_need_four_bytes() {
		assert_eq!(sniff(b"\xEF\xBB\xBFhi"), PLAIN_TEXT);
		assert_eq!(sniff(b"\xFE\xFF\x00h"), "text/plain; charset=utf-16be");
		assert_eq!(sniff(b"\xFF\xFEh\x00"), "text/plain; charset=utf-16le");
	}

	#[test]
	fn bytes_past_the_sniff_window_are_ignored() {
		let mut sample = vec![b'a'; SNIFF_LEN];
		sample.push(0x00);
		assert_eq!(sniff(&sample), PLAIN_TEXT);
	}
}

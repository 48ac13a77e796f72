//! Line filter for VLESS links carried over the xhttp transport.

use rayon::prelude::*;

pub const VLESS_SCHEME: &str = "vless://";
pub const XHTTP_MARKER: &str = "xhttp";

// Case-sensitive on the scheme; the marker may appear anywhere in the link
#[inline(always)]
pub fn is_xhttp_vless(line: &str) -> bool {
    line.starts_with(VLESS_SCHEME) && line.contains(XHTTP_MARKER)
}

// Same boundaries as Unicode line splitting: LF, CR, VT, FF, FS, GS, RS, NEL, LS, PS
#[inline(always)]
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Returns the trimmed lines of `content` that are xhttp VLESS links, in input order.
pub fn filter_lines(content: &str) -> Vec<String> {
    // CRLF leaves an empty piece between the two breaks; it never matches
    content
        .par_split(is_line_break)
        .map(str::trim)
        .filter(|line| is_xhttp_vless(line))
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_only_lowercase_scheme_with_marker() {
        let content = "vless://abc-xhttp-1\nss://other\nVLESS://UPPER";
        assert_eq!(filter_lines(content), vec!["vless://abc-xhttp-1"]);
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(filter_lines("").is_empty());
        assert!(filter_lines("\n\r\n  \n").is_empty());
    }

    #[test]
    fn lines_are_trimmed_before_matching() {
        let content = "   vless://a?type=xhttp#one  \n\tvless://b?type=ws\n";
        assert_eq!(filter_lines(content), vec!["vless://a?type=xhttp#one"]);
    }

    #[test]
    fn marker_must_be_present() {
        assert!(!is_xhttp_vless("vless://uuid@host:443?type=grpc"));
        assert!(!is_xhttp_vless("vmess://xhttp"));
        assert!(!is_xhttp_vless(" vless://xhttp"));
        assert!(is_xhttp_vless("vless://uuid@host:443?type=xhttp&path=%2F"));
    }

    #[test]
    fn handles_crlf_and_bare_cr() {
        let content = "vless://1-xhttp\r\nvless://2-xhttp\rvless://3-xhttp";
        assert_eq!(
            filter_lines(content),
            vec!["vless://1-xhttp", "vless://2-xhttp", "vless://3-xhttp"]
        );
    }

    #[test]
    fn splits_on_every_unicode_line_break() {
        let content = "vless://a-xhttp\u{2028}vless://b-xhttp\x0cvless://c-xhttp\u{85}vless://d-xhttp\
                       \x0bvless://e-xhttp\x1cvless://f-xhttp\x1dvless://g-xhttp\x1evless://h-xhttp\
                       \u{2029}vless://i-xhttp";
        let expected: Vec<String> = ('a'..='i').map(|c| format!("vless://{c}-xhttp")).collect();
        assert_eq!(filter_lines(content), expected);
    }

    #[test]
    fn preserves_order_on_large_input() {
        let content: String = (0..5000)
            .map(|i| {
                if i % 3 == 0 {
                    format!("vless://{i}-xhttp\n")
                } else {
                    format!("trojan://{i}\n")
                }
            })
            .collect();
        let expected: Vec<String> = (0..5000)
            .filter(|i| i % 3 == 0)
            .map(|i| format!("vless://{i}-xhttp"))
            .collect();
        assert_eq!(filter_lines(&content), expected);
    }

    #[test]
    fn filtering_is_idempotent() {
        let samples = [
            "vless://a-xhttp\nfoo\n  vless://b-xhttp  \nvless://c",
            "",
            "VLESS://x-xhttp\r\nvless://y-xhttp",
        ];
        for content in samples {
            let once = filter_lines(content);
            assert!(once.iter().all(|line| is_xhttp_vless(line)));
            assert_eq!(filter_lines(&once.join("\n")), once);
        }
    }
}

//! PEM block extraction from feed entry text

use crate::utils::CertificateError;
use regex::Regex;
use once_cell::sync::Lazy;

static PEM_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)-----BEGIN CERTIFICATE-----.*?-----END CERTIFICATE-----")
        .expect("Invalid PEM block pattern")
});

static LINE_BREAK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)<br\s*/?>|&lt;br\s*/?&gt;")
        .expect("Invalid line break pattern")
});

/// Return the first PEM certificate block in `summary`.
///
/// The scan is plain text: the shortest span between the BEGIN and END
/// markers wins, and HTML line breaks inside it become newlines.
pub fn extract_certificate(summary: &str) -> Result<String, CertificateError> {
    let block = PEM_BLOCK.find(summary).ok_or(CertificateError::NotFound)?;

    Ok(LINE_BREAK.replace_all(block.as_str(), "\n").into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_and_normalizes_line_breaks() {
        let summary = "example.com<br><div>-----BEGIN CERTIFICATE-----<br>QUJD<br/>REVG<br />-----END CERTIFICATE-----</div>";
        assert_eq!(
            extract_certificate(summary).unwrap(),
            "-----BEGIN CERTIFICATE-----\nQUJD\nREVG\n-----END CERTIFICATE-----"
        );
    }

    #[test]
    fn test_first_of_two_blocks() {
        let summary = "-----BEGIN CERTIFICATE-----<br>Rmlyc3Q=<br>-----END CERTIFICATE-----\
            <br>-----BEGIN CERTIFICATE-----<br>U2Vjb25k<br>-----END CERTIFICATE-----";
        let pem = extract_certificate(summary).unwrap();
        assert!(pem.contains("Rmlyc3Q="));
        assert!(!pem.contains("U2Vjb25k"));
        assert_eq!(pem.matches("-----END CERTIFICATE-----").count(), 1);
    }

    #[test]
    fn test_escaped_line_breaks() {
        let summary = "-----BEGIN CERTIFICATE-----&lt;br&gt;QUJD&lt;BR/&gt;-----END CERTIFICATE-----";
        assert_eq!(
            extract_certificate(summary).unwrap(),
            "-----BEGIN CERTIFICATE-----\nQUJD\n-----END CERTIFICATE-----"
        );
    }

    #[test]
    fn test_multiline_block() {
        let summary = "-----BEGIN CERTIFICATE-----\nQUJD\n-----END CERTIFICATE-----";
        assert_eq!(extract_certificate(summary).unwrap(), summary);
    }

    #[test]
    fn test_no_markers() {
        assert_eq!(
            extract_certificate("example.com<br>www.example.com"),
            Err(CertificateError::NotFound)
        );
    }

    #[test]
    fn test_unterminated_block() {
        assert_eq!(
            extract_certificate("-----BEGIN CERTIFICATE-----<br>QUJD"),
            Err(CertificateError::NotFound)
        );
    }
}

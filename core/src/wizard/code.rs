//! Verification codes the user posts to prove they own an account.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::{VERIFICATION_CODE_BYTES, VERIFICATION_CODE_PREFIX};
use crate::models::SocialNetwork;

/// `CH-` followed by six uppercase hex digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationCode(String);

impl VerificationCode {
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        let mut bytes = [0u8; VERIFICATION_CODE_BYTES];
        rng.fill(&mut bytes[..]);
        Self(format!(
            "{}{}",
            VERIFICATION_CODE_PREFIX,
            hex::encode_upper(bytes)
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Caption the user copies into the verification post.
    pub fn caption(&self, platform: Option<SocialNetwork>) -> String {
        let network = platform.map(|p| p.label()).unwrap_or("minha rede");
        format!(
            "Conectando meu {} ao CollabHub! Código de verificação: {} #CollabHub",
            network, self.0
        )
    }
}

impl fmt::Display for VerificationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_code_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        let code = VerificationCode::generate(&mut rng);
        let s = code.as_str();
        assert!(s.starts_with("CH-"));
        let tail = &s[3..];
        assert_eq!(tail.len(), 6);
        assert!(tail.chars().all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c)));
    }

    #[test]
    fn test_same_seed_same_code() {
        let a = VerificationCode::generate(&mut StdRng::seed_from_u64(42));
        let b = VerificationCode::generate(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_caption_mentions_code_and_platform() {
        let code = VerificationCode::generate(&mut StdRng::seed_from_u64(1));
        let caption = code.caption(Some(SocialNetwork::TikTok));
        assert!(caption.contains(code.as_str()));
        assert!(caption.contains("TikTok"));
        assert!(code.caption(None).contains("minha rede"));
    }
}

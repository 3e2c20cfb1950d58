//! Challenge authentication
//!
//! PJLink devices greet each new connection with a line announcing whether
//! authentication is required. When it is, the greeting carries a one-shot
//! seed and the client must prefix its command with the MD5 digest of
//! `seed + password`. The seed is valid for that connection only.
//!
//! MD5 is weak, but it is what PJLink devices implement; this is a wire
//! compatibility requirement, not a credential store.

/// Parsed greeting line from a freshly opened connection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Challenge {
    /// Authentication seed, present only when the device requires auth
    pub seed: Option<String>,
}

impl Challenge {
    /// Parse the greeting line
    ///
    /// A recognized greeting has the shape `PJLINK <0|1> [seed]`: flag `0`
    /// means open access, flag `1` means authentication with the third token
    /// as seed. Any other shape is treated as open access, with a warning,
    /// since some devices send nonstandard banners.
    pub fn parse(greeting: &str) -> Self {
        let tokens: Vec<&str> = greeting.split_whitespace().collect();

        match tokens.as_slice() {
            ["PJLINK", "0", ..] => Self { seed: None },
            ["PJLINK", "1", seed, ..] => Self {
                seed: Some((*seed).to_string()),
            },
            _ => {
                tracing::warn!(
                    "Unrecognized greeting {:?}, assuming no authentication",
                    greeting
                );
                Self { seed: None }
            }
        }
    }

    /// Whether the device asked for authentication
    pub fn required(&self) -> bool {
        self.seed.is_some()
    }

    /// Compute the digest token for this challenge
    ///
    /// With a seed: lowercase hex MD5 of the seed concatenated with the
    /// password, no separator. Without one: the empty string, so the token
    /// can be prefixed onto the command line unconditionally and contribute
    /// zero bytes when auth is off.
    pub fn token(&self, password: &str) -> String {
        match &self.seed {
            Some(seed) => {
                let digest = md5::compute(format!("{}{}", seed, password));
                format!("{:x}", digest)
            }
            None => String::new(),
        }
    }
}

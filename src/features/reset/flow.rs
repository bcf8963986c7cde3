//! Client-side state machine sequencing the password reset: email submission,
//! OTP verification, then the new-password form. Transitions are linear and
//! the final stage is only constructible through a successful OTP
//! verification, so proof-of-verification always travels with the stage. The
//! flow lives in component-local state: a page reload restarts at the email
//! stage.

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResetFlow {
    /// Initial stage: collect the account email.
    Email,
    /// An OTP was sent to `email`. `dev_otp` carries the passcode a
    /// development-mode server may return inline, for display only.
    Otp {
        email: String,
        dev_otp: Option<String>,
    },
    /// The OTP was verified; it is resubmitted with the new password as
    /// proof of verification.
    Reset { email: String, otp: String },
}

impl ResetFlow {
    pub fn new() -> Self {
        ResetFlow::Email
    }

    /// Forward transition out of `Email` once the server accepted the address.
    pub fn otp_sent(&self, email: String, dev_otp: Option<String>) -> Option<ResetFlow> {
        match self {
            ResetFlow::Email => Some(ResetFlow::Otp { email, dev_otp }),
            _ => None,
        }
    }

    /// Forward transition out of `Otp` after the server reported
    /// `verified: true`. The email carries forward with the verified code.
    pub fn otp_verified(&self, otp: String) -> Option<ResetFlow> {
        match self {
            ResetFlow::Otp { email, .. } => Some(ResetFlow::Reset {
                email: email.clone(),
                otp,
            }),
            _ => None,
        }
    }

    /// Backward transition. Leaving `Otp` discards the pending code; leaving
    /// `Reset` discards the verified code and returns to `Otp` for the same
    /// email.
    pub fn back(&self) -> Option<ResetFlow> {
        match self {
            ResetFlow::Email => None,
            ResetFlow::Otp { .. } => Some(ResetFlow::Email),
            ResetFlow::Reset { email, .. } => Some(ResetFlow::Otp {
                email: email.clone(),
                dev_otp: None,
            }),
        }
    }
}

impl Default for ResetFlow {
    fn default() -> Self {
        ResetFlow::new()
    }
}

#[cfg(test)]
mod tests {
    use super::ResetFlow;

    #[test]
    fn happy_path_carries_email_and_otp_forward() {
        let flow = ResetFlow::new();
        let flow = flow
            .otp_sent("a@b.com".to_string(), Some("482913".to_string()))
            .expect("email stage should accept the address");
        assert_eq!(
            flow,
            ResetFlow::Otp {
                email: "a@b.com".to_string(),
                dev_otp: Some("482913".to_string()),
            }
        );

        let flow = flow
            .otp_verified("482913".to_string())
            .expect("otp stage should accept verification");
        assert_eq!(
            flow,
            ResetFlow::Reset {
                email: "a@b.com".to_string(),
                otp: "482913".to_string(),
            }
        );
    }

    #[test]
    fn reset_stage_is_unreachable_without_verification() {
        assert_eq!(ResetFlow::Email.otp_verified("482913".to_string()), None);
        let reset = ResetFlow::Reset {
            email: "a@b.com".to_string(),
            otp: "482913".to_string(),
        };
        assert_eq!(reset.otp_verified("000000".to_string()), None);
    }

    #[test]
    fn forward_transitions_only_fire_from_their_stage() {
        let otp = ResetFlow::Otp {
            email: "a@b.com".to_string(),
            dev_otp: None,
        };
        assert_eq!(otp.otp_sent("x@y.com".to_string(), None), None);
    }

    #[test]
    fn back_walks_the_stages_and_discards_codes() {
        let reset = ResetFlow::Reset {
            email: "a@b.com".to_string(),
            otp: "482913".to_string(),
        };
        let otp = reset.back().expect("reset should step back to otp");
        assert_eq!(
            otp,
            ResetFlow::Otp {
                email: "a@b.com".to_string(),
                dev_otp: None,
            }
        );
        assert_eq!(otp.back(), Some(ResetFlow::Email));
        assert_eq!(ResetFlow::Email.back(), None);
    }
}

//! Password-reset feature: the three-stage flow state machine. The page that
//! drives it lives in `routes::forgot_password`.

pub(crate) mod flow;

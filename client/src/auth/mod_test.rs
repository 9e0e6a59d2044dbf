use super::*;

#[test]
fn api_paths_match_backend_routes() {
    assert_eq!(AuthMode::SignUp.api_path(), "/api/v1/user/signup");
    assert_eq!(AuthMode::SignIn.api_path(), "/api/v1/user/signin");
}

#[test]
fn only_signup_collects_name() {
    assert!(AuthMode::SignUp.collects_name());
    assert!(!AuthMode::SignIn.collects_name());
}

#[test]
fn switch_link_points_at_other_mode() {
    assert_eq!(AuthMode::SignIn.other().route(), "/signup");
    assert_eq!(AuthMode::SignUp.other().route(), "/signin");
    assert_eq!(AuthMode::SignIn.other().submit_label(), "Sign up");
}

#[test]
fn copy_differs_per_mode() {
    assert_eq!(AuthMode::SignUp.heading(), "Create an account");
    assert_eq!(AuthMode::SignIn.switch_prompt(), "Don't have an account?");
}

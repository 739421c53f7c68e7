use dioxus::prelude::*;

/// Employee sign-in form. Credentials are checked by the backend, not here;
/// the form only reports the email to sign in with.
#[component]
pub fn LoginUI(on_login: EventHandler<String>) -> Element {
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let email = email().trim().to_string();
        if email.is_empty() {
            return;
        }
        on_login.call(email);
    };

    rsx! {
        div {
            class: "login-page",
            h1 { class: "login-title", "Billed" }
            div {
                class: "login-card",
                h2 { "Employé" }
                form {
                    "data-testid": "form-employee",
                    onsubmit: handle_submit,
                    label { "for": "employee-email", "Votre email" }
                    input {
                        id: "employee-email",
                        r#type: "email",
                        required: true,
                        "data-testid": "employee-email-input",
                        placeholder: "johndoe@email.com",
                        value: email(),
                        oninput: move |evt| email.set(evt.value()),
                    }
                    label { "for": "employee-password", "Mot de passe" }
                    input {
                        id: "employee-password",
                        r#type: "password",
                        required: true,
                        "data-testid": "employee-password-input",
                        placeholder: "******",
                        value: password(),
                        oninput: move |evt| password.set(evt.value()),
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        "data-testid": "employee-login-button",
                        "Se connecter"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::test_support::{opening_tag, render};

    fn login_app(_: ()) -> Element {
        rsx! { LoginUI { on_login: move |_| {} } }
    }

    #[test]
    fn test_login_form() {
        let html = render(login_app, ());
        assert!(opening_tag(&html, "employee-email-input").unwrap().contains(r#"type="email""#));
        assert!(opening_tag(&html, "employee-password-input").is_some());
        assert!(opening_tag(&html, "employee-login-button").is_some());
    }
}

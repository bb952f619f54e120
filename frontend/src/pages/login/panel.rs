use crate::pages::login::{components::form::LoginForm, view_model::use_login_view_model};
use leptos::{ev::SubmitEvent, Callback, *};

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_login_view_model();
    let form = vm.form;

    let handle_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    });
    let toggle_mode = Callback::new(move |_| vm.toggle_mode());

    let username_input = Callback::new(move |value: String| form.username.set(value));
    let password_input = Callback::new(move |value: String| form.password.set(value));
    let name_input = Callback::new(move |value: String| form.name.set(value));

    view! {
        <LoginForm
            username=form.username
            password=form.password
            name=form.name
            register_mode=form.register_mode
            error=vm.error
            pending=vm.pending
            on_username_input=username_input
            on_password_input=password_input
            on_name_input=name_input
            on_toggle_mode=toggle_mode
            on_submit=handle_submit
        />
    }
}

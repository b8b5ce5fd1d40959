use contracts::system::users::{Role, User};
use leptos::prelude::*;

use crate::shared::components::ui::{Checkbox, FieldError, Input};
use crate::shared::resource_form::ResourceForm;

/// Toggle `role` in the selected role ids, keeping them ordered
pub fn toggle_role(role_ids: &mut Vec<i64>, role: Role, checked: bool) {
    role_ids.retain(|id| *id != role.id());
    if checked {
        role_ids.push(role.id());
        role_ids.sort_unstable();
    }
}

#[component]
pub fn UserFormFields(form: ResourceForm<User>) -> impl IntoView {
    let values = form.form;
    let password_label = move || {
        if form.is_update() {
            "Contraseña (dejar vacío para no cambiar)".to_string()
        } else {
            "Contraseña".to_string()
        }
    };

    view! {
        <div class="form__row">
            <Input
                label="Nombre"
                id="user-first-name"
                value=Signal::derive(move || values.with(|f| f.first_name.clone()))
                on_input=Callback::new(move |v| values.update(|f| f.first_name = v))
                error=form.field_error("first_name")
            />
            <Input
                label="Apellido"
                id="user-last-name"
                value=Signal::derive(move || values.with(|f| f.last_name.clone()))
                on_input=Callback::new(move |v| values.update(|f| f.last_name = v))
                error=form.field_error("last_name")
            />
        </div>
        <Input
            label="Correo electrónico"
            id="user-email"
            input_type="email"
            value=Signal::derive(move || values.with(|f| f.email.clone()))
            on_input=Callback::new(move |v| values.update(|f| f.email = v))
            error=form.field_error("email")
        />
        <Input
            label=Signal::derive(password_label)
            id="user-password"
            input_type="password"
            autocomplete="new-password"
            value=Signal::derive(move || values.with(|f| f.password.clone()))
            on_input=Callback::new(move |v| values.update(|f| f.password = v))
            error=form.field_error("password")
        />
        <div class="form__group">
            <span class="form__label">"Roles"</span>
            {Role::ALL
                .into_iter()
                .map(|role| {
                    view! {
                        <Checkbox
                            label=role.label()
                            checked=Signal::derive(move || values.with(|f| f.role_ids.contains(&role.id())))
                            on_change=Callback::new(move |checked| {
                                values.update(|f| toggle_role(&mut f.role_ids, role, checked))
                            })
                        />
                    }
                })
                .collect_view()}
            <FieldError message=form.field_error("role_ids") />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_role() {
        let mut ids = vec![3];
        toggle_role(&mut ids, Role::Admin, true);
        assert_eq!(ids, vec![1, 3]);
        toggle_role(&mut ids, Role::Admin, true);
        assert_eq!(ids, vec![1, 3]);
        toggle_role(&mut ids, Role::Buyer, false);
        assert_eq!(ids, vec![1]);
    }
}

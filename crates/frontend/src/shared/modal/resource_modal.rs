use super::Modal;
use crate::shared::components::ui::Button;
use crate::shared::resource_form::ResourceForm;
use contracts::domain::common::AggregateRoot;
use leptos::ev;
use leptos::prelude::*;

/// Create/update dialog around a [`ResourceForm`].
///
/// Rendered only while the form is open; the fields come from `children`.
#[component]
pub fn ResourceModal<R: AggregateRoot>(
    form: ResourceForm<R>,
    /// Fired by the submit button and by pressing Enter in the form
    on_submit: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    let title = Signal::derive(move || {
        if form.is_update() {
            format!("Editar {}", R::element_name())
        } else {
            format!("Crear {}", R::element_name())
        }
    });
    let submitting = Signal::derive(move || form.is_submitting());
    let children = StoredValue::new(children);

    view! {
        <Show when=move || form.is_open()>
            <Modal title=title on_close=Callback::new(move |_| form.close())>
                <form
                    class="form"
                    on:submit=move |ev: ev::SubmitEvent| {
                        ev.prevent_default();
                        on_submit.run(());
                    }
                >
                    <fieldset class="form__fieldset" disabled=move || submitting.get()>
                        {children.with_value(|children| children())}
                    </fieldset>
                    <div class="modal-footer">
                        <Button
                            variant="secondary"
                            disabled=submitting
                            on_click=Callback::new(move |_| form.close())
                        >
                            "Cancelar"
                        </Button>
                        <Button button_type="submit" loading=submitting>
                            {move || if form.is_update() { "Guardar" } else { "Crear" }}
                        </Button>
                    </div>
                </form>
            </Modal>
        </Show>
    }
}

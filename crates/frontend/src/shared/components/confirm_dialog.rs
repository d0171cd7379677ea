use leptos::prelude::*;
use thaw::*;

/// Yes/no prompt on top of the thaw `Dialog`.
///
/// `open` is owned by the caller. Dismissing the surface (mask click, Escape)
/// counts as a cancel.
#[component]
pub fn ConfirmDialog(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] title: String,
    #[prop(into)] message: Signal<String>,
    /// Disables the accept button while the confirmed action runs
    #[prop(into)]
    busy: Signal<bool>,
    #[prop(optional, into)] confirm_label: Option<String>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let surface_open = RwSignal::new(open.get_untracked());
    let confirm_label = confirm_label.unwrap_or_else(|| "Yes".to_string());

    Effect::new(move |_| surface_open.set(open.get()));

    Effect::new(move |_| {
        if !surface_open.get() && open.get_untracked() {
            on_cancel.run(());
        }
    });

    view! {
        <Dialog open=surface_open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>{title}</DialogTitle>
                    <DialogContent>{move || message.get()}</DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=busy
                            on_click=move |_| on_confirm.run(())
                        >
                            {confirm_label}
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| on_cancel.run(())
                        >
                            "No"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}

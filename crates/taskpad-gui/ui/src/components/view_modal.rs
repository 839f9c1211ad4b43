use web_sys::MouseEvent;
use yew::{
  Callback,
  Html,
  Properties,
  classes,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct ViewModalProps {
  pub text:     Option<String>,
  pub on_close: Callback<()>
}

/// Stays open until the close button
/// is pressed.
#[function_component(ViewModal)]
pub fn view_modal(
  props: &ViewModalProps
) -> Html {
  let onclick = {
    let on_close =
      props.on_close.clone();
    Callback::from(
      move |_: MouseEvent| {
        on_close.emit(());
      }
    )
  };

  html! {
      <div
          id="view-modal"
          class={classes!(
              "fixed", "inset-0", "flex", "items-center", "justify-center", "bg-black/60",
              props.text.is_none().then_some("hidden")
          )}
      >
          <div class="p-6 bg-slate-900 rounded-xl space-y-4">
              <p id="view-desc">{ props.text.clone().unwrap_or_default() }</p>
              <button id="close-view" {onclick}>{ "Close" }</button>
          </div>
      </div>
  }
}

mod app;
mod components;
mod storage;

use gloo::utils::document;

fn main() {
  console_error_panic_hook::set_once();
  wasm_tracing::set_as_global_default();

  match document().get_element_by_id("app")
  {
    | Some(root) => {
      tracing::info!(
        "mounting taskpad on #app"
      );
      yew::Renderer::<app::App>::with_root(
        root
      )
      .render();
    }
    | None => {
      tracing::warn!(
        "no #app element; mounting \
         taskpad on <body>"
      );
      yew::Renderer::<app::App>::new()
        .render();
    }
  }
}

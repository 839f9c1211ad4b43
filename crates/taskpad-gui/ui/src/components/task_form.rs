use taskpad_core::TaskDraft;
use web_sys::{
  HtmlInputElement,
  HtmlTextAreaElement,
  InputEvent,
  MouseEvent,
  SubmitEvent
};
use yew::{
  Callback,
  Html,
  Properties,
  TargetCast,
  classes,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TaskFormProps {
  pub visible:      bool,
  pub heading:      String,
  pub submit_label: String,
  pub draft:        TaskDraft,
  pub on_title:     Callback<String>,
  pub on_desc:      Callback<String>,
  pub on_date:      Callback<String>,
  pub on_save:      Callback<()>,
  pub on_cancel:    Callback<()>
}

fn input_value(
  callback: &Callback<String>
) -> Callback<InputEvent> {
  let callback = callback.clone();
  Callback::from(
    move |event: InputEvent| {
      let input: HtmlInputElement =
        event.target_unchecked_into();
      callback.emit(input.value());
    }
  )
}

#[function_component(TaskForm)]
pub fn task_form(
  props: &TaskFormProps
) -> Html {
  let onsubmit = {
    let on_save = props.on_save.clone();
    Callback::from(
      move |event: SubmitEvent| {
        event.prevent_default();
        on_save.emit(());
      }
    )
  };

  let on_cancel_click = {
    let on_cancel =
      props.on_cancel.clone();
    Callback::from(
      move |_: MouseEvent| {
        on_cancel.emit(());
      }
    )
  };

  let on_desc_input = {
    let on_desc = props.on_desc.clone();
    Callback::from(
      move |event: InputEvent| {
        let area: HtmlTextAreaElement =
          event.target_unchecked_into();
        on_desc.emit(area.value());
      }
    )
  };

  html! {
      <form
          id="task-form"
          class={classes!("space-y-3", "p-4", "bg-slate-900", "rounded-xl", (!props.visible).then_some("hidden"))}
          {onsubmit}
      >
          <h2 id="form-title" class="text-lg font-semibold">{ &props.heading }</h2>
          <input
              id="task-title"
              type="text"
              placeholder="Title"
              value={props.draft.title.clone()}
              oninput={input_value(&props.on_title)}
          />
          <textarea
              id="task-desc"
              placeholder="Description"
              value={props.draft.desc.clone()}
              oninput={on_desc_input}
          />
          <input
              id="task-date"
              type="date"
              value={props.draft.date.clone()}
              oninput={input_value(&props.on_date)}
          />
          <div class="flex gap-2">
              <button id="save-task" type="submit">{ &props.submit_label }</button>
              <button id="cancel-task" type="button" onclick={on_cancel_click}>{ "Cancel" }</button>
          </div>
      </form>
  }
}

use taskpad_core::{
  TaskId,
  TaskRow
};
use web_sys::{
  DragEvent,
  Event,
  MouseEvent
};
use yew::{
  Callback,
  Html,
  Properties,
  classes,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TaskListRowProps {
  pub row:           TaskRow,
  pub is_dragging:   bool,
  pub on_view:       Callback<TaskId>,
  pub on_edit:       Callback<TaskId>,
  pub on_delete:     Callback<TaskId>,
  pub on_toggle:     Callback<TaskId>,
  pub on_drag_start: Callback<TaskId>,
  pub on_drag_end:   Callback<()>,
  pub on_drop:       Callback<TaskId>
}

fn emit_id(
  callback: &Callback<TaskId>,
  id: TaskId
) -> Callback<MouseEvent> {
  let callback = callback.clone();
  Callback::from(move |_| {
    callback.emit(id)
  })
}

#[function_component(TaskListRow)]
pub fn task_list_row(
  props: &TaskListRowProps
) -> Html {
  let id = props.row.id;

  let ondragstart = {
    let on_drag_start =
      props.on_drag_start.clone();
    Callback::from(
      move |event: DragEvent| {
        if let Some(data_transfer) =
          event.data_transfer()
        {
          let _ = data_transfer
            .set_data(
              "text/plain",
              &id.to_string()
            );
          data_transfer
            .set_drop_effect("move");
        }
        on_drag_start.emit(id);
      }
    )
  };

  let ondragend = {
    let on_drag_end =
      props.on_drag_end.clone();
    Callback::from(move |_| {
      on_drag_end.emit(());
    })
  };

  let ondragover =
    Callback::from(|event: DragEvent| {
      event.prevent_default();
    });

  let ondrop = {
    let on_drop = props.on_drop.clone();
    Callback::from(
      move |event: DragEvent| {
        event.prevent_default();
        on_drop.emit(id);
      }
    )
  };

  let onchange = {
    let on_toggle =
      props.on_toggle.clone();
    Callback::from(
      move |_: Event| {
        on_toggle.emit(id);
      }
    )
  };

  let title_class = props
    .row
    .title_struck
    .then_some("line-through text-slate-400");

  html! {
      <div
          class={classes!(
              "task-item", "flex", "justify-between", "p-4", "bg-slate-900/70", "rounded-xl",
              props.is_dragging.then_some("opacity-50")
          )}
          data-id={id.to_string()}
          draggable="true"
          {ondragstart}
          {ondragend}
          {ondragover}
          {ondrop}
      >
          <div class="flex gap-3">
              <input type="checkbox" class="task-check" checked={props.row.completed} {onchange} />
              <div>
                  <h3 class={classes!(title_class)}>{ &props.row.title }</h3>
                  <p class="text-sm text-slate-400">{ &props.row.desc }</p>
                  <span class="text-xs text-indigo-400">{ &props.row.date }</span>
              </div>
          </div>
          <div class="flex gap-2">
              <button class="task-edit" onclick={emit_id(&props.on_edit, id)}>{ "✏️" }</button>
              <button class="task-delete" onclick={emit_id(&props.on_delete, id)}>{ "🗑️" }</button>
              <button class="task-view" onclick={emit_id(&props.on_view, id)}>{ "👁️" }</button>
          </div>
      </div>
  }
}

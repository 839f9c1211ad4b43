use taskpad_core::{
  TaskId,
  TaskRow
};
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use super::TaskListRow;

#[derive(Properties, PartialEq)]
pub struct TaskListProps {
  pub rows:          Vec<TaskRow>,
  pub dragging:      Option<TaskId>,
  pub on_view:       Callback<TaskId>,
  pub on_edit:       Callback<TaskId>,
  pub on_delete:     Callback<TaskId>,
  pub on_toggle:     Callback<TaskId>,
  pub on_drag_start: Callback<TaskId>,
  pub on_drag_end:   Callback<()>,
  pub on_drop:       Callback<TaskId>
}

#[function_component(TaskList)]
pub fn task_list(
  props: &TaskListProps
) -> Html {
  html! {
      <div id="task-list" class="space-y-3">
          {
              for props.rows.iter().cloned().map(|row| {
                  let key = row.id.to_string();
                  let is_dragging = props.dragging == Some(row.id);
                  html! {
                      <TaskListRow
                          key={key}
                          row={row}
                          is_dragging={is_dragging}
                          on_view={props.on_view.clone()}
                          on_edit={props.on_edit.clone()}
                          on_delete={props.on_delete.clone()}
                          on_toggle={props.on_toggle.clone()}
                          on_drag_start={props.on_drag_start.clone()}
                          on_drag_end={props.on_drag_end.clone()}
                          on_drop={props.on_drop.clone()}
                      />
                  }
              })
          }
      </div>
  }
}

use gloo::console::log;
use taskpad_core::{
  ActionError,
  Config,
  Session,
  StatusFilter,
  TaskId
};
use web_sys::MouseEvent;
use yew::{
  Callback,
  Html,
  UseStateHandle,
  function_component,
  html,
  use_state
};

use crate::components::{
  FilterBar,
  TaskForm,
  TaskList,
  ViewModal
};
use crate::storage::BrowserStorage;

type AppSession =
  Session<BrowserStorage>;

const TASKPAD_CONFIG_TOML: &str =
  include_str!("../assets/taskpad.toml");

fn open_session() -> AppSession {
  let config = Config::load_embedded(
    TASKPAD_CONFIG_TOML
  );
  Session::open(
    BrowserStorage::detect(),
    config
  )
}

/// Runs one action against a copy of
/// the session and publishes the copy
/// only when the action succeeded.
fn dispatch<T>(
  session: &UseStateHandle<AppSession>,
  event: &'static str,
  action: impl FnOnce(
    &mut AppSession
  ) -> Result<T, ActionError>
) {
  let mut next = (**session).clone();
  match action(&mut next) {
    | Ok(_) => session.set(next),
    | Err(error)
      if error.is_benign() =>
    {
      ui_debug(
        event,
        &error.to_string()
      );
    }
    | Err(error) => {
      tracing::error!(
        event,
        %error,
        "action failed"
      );
    }
  }
}

fn id_callback<T: 'static>(
  session: &UseStateHandle<AppSession>,
  event: &'static str,
  action: fn(
    &mut AppSession,
    TaskId
  ) -> Result<T, ActionError>
) -> Callback<TaskId> {
  let session = session.clone();
  Callback::from(move |id: TaskId| {
    dispatch(&session, event, |s| {
      action(s, id)
    });
  })
}

fn text_callback(
  session: &UseStateHandle<AppSession>,
  apply: fn(&mut AppSession, String)
) -> Callback<String> {
  let session = session.clone();
  Callback::from(move |value: String| {
    let mut next = (*session).clone();
    apply(&mut next, value);
    session.set(next);
  })
}

#[function_component(App)]
pub fn app() -> Html {
  let session = use_state(open_session);

  let on_add_click = {
    let session = session.clone();
    Callback::from(
      move |_: MouseEvent| {
        dispatch(
          &session,
          "button.add.click",
          |s| {
            s.toggle_form();
            Ok(())
          }
        );
      }
    )
  };

  let on_title = text_callback(
    &session,
    |s, value| s.form_mut().set_title(value)
  );
  let on_desc = text_callback(
    &session,
    |s, value| s.form_mut().set_desc(value)
  );
  let on_date = text_callback(
    &session,
    |s, value| s.form_mut().set_date(value)
  );
  let on_query = text_callback(
    &session,
    |s, value| s.set_query(value)
  );

  let on_save = {
    let session = session.clone();
    Callback::from(move |()| {
      dispatch(
        &session,
        "form.save",
        AppSession::save
      );
    })
  };

  let on_cancel = {
    let session = session.clone();
    Callback::from(move |()| {
      dispatch(
        &session,
        "form.cancel",
        |s| {
          s.cancel_form();
          Ok(())
        }
      );
    })
  };

  let on_status = {
    let session = session.clone();
    Callback::from(
      move |status: StatusFilter| {
        dispatch(
          &session,
          "filter.status",
          |s| {
            s.set_status(status);
            Ok(())
          }
        );
      }
    )
  };

  let on_view = id_callback(
    &session,
    "task.view",
    AppSession::view
  );
  let on_edit = id_callback(
    &session,
    "task.edit",
    AppSession::begin_edit
  );
  let on_delete = id_callback(
    &session,
    "task.delete",
    AppSession::delete
  );
  let on_toggle = id_callback(
    &session,
    "task.toggle",
    AppSession::toggle_complete
  );
  let on_drop = id_callback(
    &session,
    "task.drop",
    AppSession::drop_on
  );
  let on_drag_start = id_callback(
    &session,
    "task.drag_start",
    |s, id| {
      s.drag_start(id);
      Ok(())
    }
  );

  let on_drag_end = {
    let session = session.clone();
    Callback::from(move |()| {
      if session.dragging().is_some() {
        dispatch(
          &session,
          "task.drag_end",
          |s| {
            s.drag_end();
            Ok(())
          }
        );
      }
    })
  };

  let on_close_view = {
    let session = session.clone();
    Callback::from(move |()| {
      dispatch(
        &session,
        "view.close",
        |s| {
          s.close_view();
          Ok(())
        }
      );
    })
  };

  html! {
      <main class="max-w-2xl mx-auto p-6 space-y-6">
          <header class="flex justify-between items-center">
              <h1 class="text-2xl font-bold">{ "Taskpad" }</h1>
              <button id="add-task-btn" onclick={on_add_click}>{ "+ Add Task" }</button>
          </header>
          <TaskForm
              visible={session.form().is_visible()}
              heading={session.form_heading().to_string()}
              submit_label={session.form_submit_label().to_string()}
              draft={session.form().draft().clone()}
              {on_title}
              {on_desc}
              {on_date}
              {on_save}
              {on_cancel}
          />
          <FilterBar
              query={session.filter().query.clone()}
              status={session.filter().status}
              {on_query}
              {on_status}
          />
          <TaskList
              rows={session.rows().to_vec()}
              dragging={session.dragging()}
              {on_view}
              {on_edit}
              {on_delete}
              {on_toggle}
              {on_drag_start}
              {on_drag_end}
              {on_drop}
          />
          <ViewModal
              text={session.overlay().map(str::to_string)}
              on_close={on_close_view}
          />
      </main>
  }
}

fn ui_debug(
  event: &str,
  detail: &str
) {
  tracing::debug!(
    event, detail, "ui-debug"
  );
  log!(format!(
    "[ui-debug] {event}: {detail}"
  ));
}

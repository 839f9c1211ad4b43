use taskpad_core::StatusFilter;
use web_sys::{
  Event,
  HtmlInputElement,
  HtmlSelectElement,
  InputEvent
};
use yew::{
  Callback,
  Html,
  Properties,
  TargetCast,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct FilterBarProps {
  pub query:     String,
  pub status:    StatusFilter,
  pub on_query:  Callback<String>,
  pub on_status: Callback<StatusFilter>
}

#[function_component(FilterBar)]
pub fn filter_bar(
  props: &FilterBarProps
) -> Html {
  let oninput = {
    let on_query =
      props.on_query.clone();
    Callback::from(
      move |event: InputEvent| {
        let input: HtmlInputElement =
          event.target_unchecked_into();
        on_query.emit(input.value());
      }
    )
  };

  let onchange = {
    let on_status =
      props.on_status.clone();
    Callback::from(
      move |event: Event| {
        let select: HtmlSelectElement =
          event.target_unchecked_into();
        on_status.emit(
          StatusFilter::from_selector(
            &select.value()
          )
        );
      }
    )
  };

  let option = |status: StatusFilter,
                label: &str| {
    html! {
        <option
            value={status.selector_value()}
            selected={props.status == status}
        >
            { label.to_string() }
        </option>
    }
  };

  html! {
      <div class="flex gap-3">
          <input
              id="search-input"
              type="text"
              placeholder="Search tasks..."
              value={props.query.clone()}
              {oninput}
          />
          <select id="status-filter" {onchange}>
              { option(StatusFilter::All, "All") }
              { option(StatusFilter::Completed, "Completed") }
              { option(StatusFilter::Pending, "Pending") }
          </select>
      </div>
  }
}

//! Course-management page: the add-course form plus the full course list.

use view_models::admin_course_cards;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::CourseCardView;
use crate::state::{Action, StoreHandle};

/// Course management page component.
///
/// The submit callback is registered once per mounted form; re-renders
/// never stack additional handlers.
#[function_component(AdminCoursesPage)]
pub fn admin_courses_page() -> Html {
    let store = use_context::<StoreHandle>().expect("store context");
    let title = use_state(String::new);
    let description = use_state(String::new);

    let on_title_input = {
        let title = title.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            title.set(input.value());
        })
    };

    let on_description_input = {
        let description = description.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            description.set(input.value());
        })
    };

    let onsubmit = {
        let store = store.clone();
        let title = title.clone();
        let description = description.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let new_title = (*title).clone();
            let new_description = (*description).clone();

            // Mirror the store's acceptance check so the fields only
            // clear when the course is actually added.
            let accepted = !new_title.is_empty()
                && !new_description.is_empty()
                && !store.store.courses.iter().any(|c| c.title == new_title);

            store.dispatch(Action::AddCourse {
                title: new_title,
                description: new_description,
            });

            if accepted {
                title.set(String::new());
                description.set(String::new());
            }
        })
    };

    let cards = admin_course_cards(&store.store);

    html! {
        <div>
            <h1>{"Manage Courses"}</h1>

            <form class="card add-course-form" {onsubmit}>
                <input
                    type="text"
                    placeholder="Course title"
                    value={(*title).clone()}
                    oninput={on_title_input}
                />
                <input
                    type="text"
                    placeholder="Course description"
                    value={(*description).clone()}
                    oninput={on_description_input}
                />
                <button type="submit" class="btn btn-primary">{"Add Course"}</button>
            </form>

            <div class="courses-grid">
                { for cards.iter().map(|card| {
                    let on_delete = {
                        let store = store.clone();
                        let id = card.id;
                        Callback::from(move |_| store.dispatch(Action::DeleteCourse(id)))
                    };

                    html! {
                        <CourseCardView
                            key={card.id}
                            title={card.title.clone()}
                            description={card.description.clone()}
                        >
                            <button class="delete-btn" onclick={on_delete}>
                                {"Delete"}
                            </button>
                        </CourseCardView>
                    }
                })}
            </div>
        </div>
    }
}

//! Enrolled-courses page component.

use view_models::enrolled_courses;
use yew::prelude::*;

use crate::components::CourseCardView;
use crate::state::StoreHandle;

/// Courses page component: the grid of enrolled courses.
#[function_component(CoursesPage)]
pub fn courses_page() -> Html {
    let store = use_context::<StoreHandle>().expect("store context");
    let cards = enrolled_courses(&store.store);

    html! {
        <div>
            <h1>{"Available Courses"}</h1>

            if cards.is_empty() {
                <div class="card">
                    <p>{"You are not enrolled in any courses yet."}</p>
                </div>
            } else {
                <div class="courses-grid">
                    { for cards.iter().map(|card| html! {
                        <CourseCardView
                            key={card.id}
                            title={card.title.clone()}
                            description={card.description.clone()}
                        />
                    })}
                </div>
            }
        </div>
    }
}

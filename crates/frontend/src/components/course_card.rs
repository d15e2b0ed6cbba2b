//! Course card component.

use yew::prelude::*;

/// Properties for CourseCard component.
#[derive(Properties, PartialEq)]
pub struct CourseCardProps {
    pub title: String,
    pub description: String,
    /// Optional action controls rendered at the bottom of the card.
    #[prop_or_default]
    pub children: Children,
}

/// A title + description card, used by both the student grid and the
/// admin course list.
#[function_component(CourseCardView)]
pub fn course_card(props: &CourseCardProps) -> Html {
    html! {
        <div class="course-card">
            <h3>{ &props.title }</h3>
            <p>{ &props.description }</p>
            { for props.children.iter() }
        </div>
    }
}

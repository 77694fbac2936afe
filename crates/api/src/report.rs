//! Printable HTML report of a client session.
//!
//! The architect opens it in a browser and prints it to PDF. Rendering is
//! done with an askama template, which escapes every interpolated value.

use std::collections::HashMap;

use archimatch_core::answer::display_answer_value;
use archimatch_core::interaction::ACTION_LIKE;
use archimatch_core::session::SessionStatus;
use archimatch_core::types::{DbId, Timestamp};
use archimatch_db::models::client_session::ClientSessionDetail;
use archimatch_db::repositories::RoomTypeRepo;
use askama::Template;
use sqlx::PgPool;

use crate::error::{AppError, AppResult};

#[derive(Template)]
#[template(path = "session_report.html")]
pub struct SessionReportTemplate {
    pub client_name: String,
    pub email: String,
    pub architect: String,
    pub status_label: &'static str,
    pub started_on: String,
    pub completed_on: String,
    pub generated_on: String,
    pub general_info: Vec<InfoLine>,
    pub selected_rooms: Vec<String>,
    pub answer_count: usize,
    pub liked_count: usize,
    pub room_count: usize,
    pub answer_groups: Vec<AnswerGroup>,
    pub liked_photos: Vec<LikedPhoto>,
}

/// A labelled line of the general information block.
pub struct InfoLine {
    pub label: &'static str,
    pub value: String,
}

/// Answers of one room type, in question order.
pub struct AnswerGroup {
    pub room_type: String,
    pub answers: Vec<AnswerLine>,
}

pub struct AnswerLine {
    pub question: String,
    pub answer: String,
}

pub struct LikedPhoto {
    pub image_url: String,
    pub caption: String,
    pub comments: Vec<String>,
}

/// Build and render the report of `detail`.
pub async fn render_session_report(pool: &PgPool, detail: &ClientSessionDetail) -> AppResult<String> {
    let selected_ids: Vec<DbId> = detail
        .session
        .selected_room_types
        .0
        .iter()
        .filter_map(|id| id.parse().ok())
        .collect();
    let mut rooms =
        RoomTypeRepo::find_active_owned(pool, detail.session.architect_id, &selected_ids).await?;
    rooms.sort_by(|a, b| (a.display_order, &a.name).cmp(&(b.display_order, &b.name)));
    let room_names = rooms.into_iter().map(|rt| rt.name).collect();

    build_report(detail, room_names, chrono::Utc::now())
        .render()
        .map_err(|e| AppError::InternalError(format!("Report rendering error: {e}")))
}

/// Assemble the template data. Only liked photos are listed.
pub fn build_report(
    detail: &ClientSessionDetail,
    selected_rooms: Vec<String>,
    now: Timestamp,
) -> SessionReportTemplate {
    let session = &detail.session;

    let architect = detail
        .architect
        .as_ref()
        .map(|a| match &a.company {
            Some(company) => format!("{} ({company})", a.name),
            None => a.name.clone(),
        })
        .unwrap_or_default();

    let status_label = SessionStatus::from_name(&session.status)
        .map(SessionStatus::label)
        .unwrap_or("Inconnu");

    // Group answers by room type, ordered like the questionnaire.
    let mut groups: HashMap<DbId, (i32, String, Vec<(i32, AnswerLine)>)> = HashMap::new();
    for item in &detail.answers {
        let room_type = &item.question.room_type;
        let entry = groups
            .entry(room_type.id)
            .or_insert_with(|| (room_type.display_order, room_type.name.clone(), Vec::new()));
        entry.2.push((
            item.question.question.display_order,
            AnswerLine {
                question: item.question.question.question_text.clone(),
                answer: display_answer_value(&item.answer.answer_value),
            },
        ));
    }
    let mut groups: Vec<_> = groups.into_values().collect();
    groups.sort_by(|a, b| (a.0, &a.1).cmp(&(b.0, &b.1)));
    let answer_groups: Vec<AnswerGroup> = groups
        .into_iter()
        .map(|(_, room_type, mut lines)| {
            lines.sort_by_key(|(order, _)| *order);
            AnswerGroup {
                room_type,
                answers: lines.into_iter().map(|(_, line)| line).collect(),
            }
        })
        .collect();

    let liked_photos: Vec<LikedPhoto> = detail
        .photo_interactions
        .iter()
        .filter(|i| i.interaction.action == ACTION_LIKE)
        .map(|i| LikedPhoto {
            image_url: i.photo.image_url.clone(),
            caption: [i.photo.title.as_deref(), i.photo.description.as_deref()]
                .into_iter()
                .flatten()
                .collect::<Vec<_>>()
                .join(" - "),
            comments: i
                .interaction
                .annotations
                .0
                .iter()
                .map(|a| a.comment.trim().to_string())
                .filter(|c| !c.is_empty())
                .collect(),
        })
        .collect();

    SessionReportTemplate {
        client_name: format!("{} {}", session.first_name, session.last_name),
        email: session.email.clone(),
        architect,
        status_label,
        started_on: format_date(session.created_at),
        completed_on: session.completed_at.map(format_date).unwrap_or_default(),
        generated_on: format_date(now),
        general_info: general_info(detail),
        room_count: session.selected_room_types.0.len(),
        selected_rooms,
        answer_count: detail.answers.len(),
        liked_count: liked_photos.len(),
        answer_groups,
        liked_photos,
    }
}

/// `session-<first>-<last>.html`, restricted to characters that are safe
/// inside a quoted header value.
pub fn report_filename(first_name: &str, last_name: &str) -> String {
    let clean = |s: &str| -> String {
        s.trim()
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
            .collect()
    };
    format!("session-{}-{}.html", clean(first_name), clean(last_name))
}

fn format_date(ts: Timestamp) -> String {
    ts.format("%d/%m/%Y").to_string()
}

fn general_info(detail: &ClientSessionDetail) -> Vec<InfoLine> {
    let s = &detail.session;
    let yes_no = |b: bool| if b { "Oui" } else { "Non" }.to_string();
    let housing = match (&s.housing_type, &s.housing_type_other) {
        (Some(kind), Some(other)) if !other.trim().is_empty() => Some(format!("{kind} ({other})")),
        (kind, _) => kind.clone(),
    };

    [
        ("Type de projet", s.project_type.clone()),
        ("Type de logement", housing),
        ("Usage du bien", s.property_usage.clone()),
        ("Adultes", s.household_adults.map(|n| n.to_string())),
        ("Enfants", s.household_children.map(|n| n.to_string())),
        ("Petits-enfants", s.household_grandchildren.map(|n| n.to_string())),
        ("Âge des enfants", s.children_ages.clone()),
        ("Animaux", s.has_animals.map(yes_no)),
        ("Organisation souhaitée", s.desired_organization.clone()),
        ("Commentaires", s.organization_comments.clone()),
    ]
    .into_iter()
    .filter_map(|(label, value)| {
        value
            .filter(|v| !v.trim().is_empty())
            .map(|value| InfoLine { label, value })
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use archimatch_core::interaction::Annotation;
    use archimatch_db::models::architect::ArchitectSummary;
    use archimatch_db::models::client_answer::{AnswerWithQuestion, ClientAnswer};
    use archimatch_db::models::client_session::ClientSession;
    use archimatch_db::models::inspiration_photo::InspirationPhoto;
    use archimatch_db::models::photo_interaction::{InteractionWithPhoto, PhotoInteraction};
    use archimatch_db::models::question::{Question, QuestionWithRoomType};
    use archimatch_db::models::room_type::RoomType;
    use sqlx::types::Json;
    use uuid::Uuid;

    fn now() -> Timestamp {
        chrono::Utc::now()
    }

    fn room(name: &str, order: i32) -> RoomType {
        RoomType {
            id: Uuid::new_v4(),
            architect_id: Uuid::nil(),
            parent_id: None,
            name: name.to_string(),
            display_order: order,
            is_active: true,
            created_at: now(),
            updated_at: now(),
        }
    }

    fn answer(room_type: &RoomType, text: &str, order: i32, value: &str) -> AnswerWithQuestion {
        let question = Question {
            id: Uuid::new_v4(),
            room_type_id: room_type.id,
            question_text: text.to_string(),
            question_type: "text".to_string(),
            options: None,
            required: true,
            display_order: order,
            is_active: true,
            created_at: now(),
            updated_at: now(),
        };
        AnswerWithQuestion {
            answer: ClientAnswer {
                id: Uuid::new_v4(),
                session_id: Uuid::nil(),
                question_id: question.id,
                answer_value: value.to_string(),
                created_at: now(),
                updated_at: now(),
            },
            question: QuestionWithRoomType {
                question,
                room_type: room_type.clone(),
            },
        }
    }

    fn interaction(action: &str, title: &str, comment: &str) -> InteractionWithPhoto {
        let photo = InspirationPhoto {
            id: Uuid::new_v4(),
            architect_id: Uuid::nil(),
            session_id: None,
            image_url: format!("https://cdn.example.com/{title}.jpg"),
            title: Some(title.to_string()),
            description: None,
            tags: Json(vec![]),
            room_type_ids: vec![],
            is_active: true,
            is_client_upload: false,
            created_at: now(),
            updated_at: now(),
        };
        InteractionWithPhoto {
            interaction: PhotoInteraction {
                id: Uuid::new_v4(),
                session_id: Uuid::nil(),
                photo_id: photo.id,
                action: action.to_string(),
                annotations: Json(vec![Annotation {
                    x: 50.0,
                    y: 50.0,
                    comment: comment.to_string(),
                }]),
                created_at: now(),
                updated_at: now(),
            },
            photo,
        }
    }

    fn detail(answers: Vec<AnswerWithQuestion>, interactions: Vec<InteractionWithPhoto>) -> ClientSessionDetail {
        ClientSessionDetail {
            session: ClientSession {
                id: Uuid::new_v4(),
                architect_id: Uuid::nil(),
                first_name: "Jane".to_string(),
                last_name: "Doe <script>".to_string(),
                email: "jane@example.com".to_string(),
                status: "completed".to_string(),
                completed_at: Some(now()),
                project_type: Some("renovation".to_string()),
                housing_type: Some("maison".to_string()),
                housing_type_other: None,
                property_usage: None,
                household_adults: Some(2),
                household_children: None,
                household_grandchildren: None,
                children_ages: None,
                has_animals: Some(false),
                desired_organization: None,
                organization_comments: None,
                selected_room_types: Json(vec!["a".to_string(), "b".to_string()]),
                created_at: now(),
                updated_at: now(),
            },
            architect: Some(ArchitectSummary {
                id: Uuid::nil(),
                name: "Claire Martin".to_string(),
                company: Some("Atelier Martin".to_string()),
                email: "claire@atelier.fr".to_string(),
            }),
            answers,
            photo_interactions: interactions,
        }
    }

    #[test]
    fn groups_answers_by_room_then_question_order() {
        let kitchen = room("Cuisine", 2);
        let living = room("Salon", 1);
        let d = detail(
            vec![
                answer(&kitchen, "Îlot ?", 0, "Oui"),
                answer(&living, "Deuxième", 2, "B"),
                answer(&living, "Première", 1, r#"["Bois","Lin"]"#),
            ],
            vec![],
        );

        let report = build_report(&d, vec![], now());

        let rooms: Vec<_> = report.answer_groups.iter().map(|g| g.room_type.as_str()).collect();
        assert_eq!(rooms, vec!["Salon", "Cuisine"]);
        assert_eq!(report.answer_groups[0].answers[0].question, "Première");
        assert_eq!(report.answer_groups[0].answers[0].answer, "Bois, Lin");
        assert_eq!(report.answer_count, 3);
        assert_eq!(report.room_count, 2);
    }

    #[test]
    fn only_liked_photos_are_listed() {
        let d = detail(
            vec![],
            vec![
                interaction("like", "terrasse", "Belle lumière"),
                interaction("dislike", "couloir", "Trop sombre"),
            ],
        );

        let report = build_report(&d, vec![], now());

        assert_eq!(report.liked_count, 1);
        assert_eq!(report.liked_photos[0].caption, "terrasse");
        assert_eq!(report.liked_photos[0].comments, vec!["Belle lumière"]);
    }

    #[test]
    fn rendered_html_is_escaped() {
        let d = detail(vec![], vec![]);
        let html = build_report(&d, vec!["Salon".to_string()], now()).render().unwrap();

        assert!(html.contains("Jane Doe &lt;script&gt;"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("Terminée"));
        assert!(html.contains("Atelier Martin"));
    }

    #[test]
    fn filename_is_header_safe() {
        assert_eq!(report_filename("Jane", "Doe"), "session-Jane-Doe.html");
        assert_eq!(report_filename("Jean Luc", "O\"Brien"), "session-Jean_Luc-O_Brien.html");
    }
}

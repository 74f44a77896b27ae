use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String, pub message: String }

#[derive(ToSchema)]
pub struct ServiceDoc {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: String,
    pub duration: String,
    pub features: Vec<String>,
}

#[derive(ToSchema)]
pub struct TestimonialDoc {
    pub id: String,
    pub name: String,
    pub text: String,
    pub rating: i32,
    pub date: String,
    pub avatar_url: Option<String>,
}

#[derive(ToSchema)]
pub struct ConsultationRequestDoc {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service_id: String,
    pub message: Option<String>,
    pub preferred_date: Option<String>,
}

#[derive(ToSchema)]
pub struct ContactFormDoc { pub name: String, pub email: String, pub subject: String, pub message: String }

#[derive(ToSchema)]
pub struct SubmissionReceiptDoc { pub success: bool, pub id: String, pub message: String }

#[derive(ToSchema)]
pub struct ApiErrorDoc { pub error: String, pub detail: Option<String> }

#[derive(OpenApi)]
#[openapi(
    info(title = "Astro Consulting API"),
    paths(
        crate::routes::health,
        crate::routes::catalog::list_services,
        crate::routes::catalog::list_testimonials,
        crate::routes::submissions::create_consultation_request,
        crate::routes::submissions::create_contact_message,
    ),
    components(
        schemas(
            HealthResponse,
            ServiceDoc,
            TestimonialDoc,
            ConsultationRequestDoc,
            ContactFormDoc,
            SubmissionReceiptDoc,
            ApiErrorDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "catalog"),
        (name = "submissions"),
    )
)]
pub struct ApiDoc;

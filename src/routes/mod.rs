use actix_web::web;

pub mod event;
pub mod health;
pub mod talk;
pub mod user;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/v2.1")
            .service(
                web::scope("/events")
                    .service(event::list::list_events)
                    .service(event::show::show_event)
                    .service(event::hosts::list_hosts)
                    .service(event::hosts::add_host)
                    .service(event::hosts::remove_host),
            )
            .service(
                web::scope("/talks")
                    .service(talk::claims::create_claim)
                    .service(talk::claims::reject_claim),
            )
            .service(web::scope("/users").service(user::create::create)),
    );
    cfg.service(web::scope("/health").service(health::health));
}

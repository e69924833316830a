use crate::configuration::Settings;
use crate::routes;
use crate::storage::Storage;
use actix_cors::Cors;
use actix_web::{dev::Server, web, App, HttpServer};
use std::net::TcpListener;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

pub async fn run(
    listener: TcpListener,
    storage: Arc<dyn Storage>,
    settings: Settings,
) -> Result<Server, std::io::Error> {
    let settings = web::Data::new(settings);
    // The backend was chosen once at startup; handlers only ever see the
    // trait object.
    let storage: web::Data<Arc<dyn Storage>> = web::Data::new(storage);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .service(web::scope("/health_check").service(routes::health_check))
            .service(
                web::scope("/properties")
                    .service(routes::property::get::list)
                    // registered ahead of /{id} so "featured" is not
                    // swallowed by the id matcher
                    .service(routes::property::get::featured)
                    .service(routes::property::get::item)
                    .service(routes::property::add::item)
                    .service(routes::property::update::item)
                    .service(routes::property::delete::item),
            )
            .service(
                web::scope("/inquiries")
                    .service(routes::inquiry::get::list)
                    .service(routes::inquiry::get::by_property)
                    .service(routes::inquiry::add::item)
                    .service(routes::inquiry::update::item),
            )
            .service(
                web::scope("/conversations")
                    .service(routes::conversation::get::list)
                    .service(routes::conversation::get::item)
                    .service(routes::conversation::upsert::item)
                    .service(routes::conversation::update::item),
            )
            .service(web::scope("/dashboard").service(routes::dashboard::stats::item))
            .app_data(storage.clone())
            .app_data(settings.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}

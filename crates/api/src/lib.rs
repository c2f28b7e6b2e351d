mod alarm;
mod error;
mod job_schedulers;
mod notification;
mod profile;
mod session;
mod shared;
mod stats;
mod status;

use actix_cors::Cors;
use actix_web::{dev::Server, middleware, web, App, HttpServer};
pub use job_schedulers::AlarmPoller;
use practice_alarm_infra::AlarmContext;
use session::SignInUseCase;
use shared::usecase::execute;
use std::net::TcpListener;
use tracing::warn;
use tracing_actix_web::TracingLogger;

pub fn configure_server_api(cfg: &mut web::ServiceConfig) {
    alarm::configure_routes(cfg);
    notification::configure_routes(cfg);
    profile::configure_routes(cfg);
    session::configure_routes(cfg);
    stats::configure_routes(cfg);
    status::configure_routes(cfg);
}

pub struct Application {
    server: Server,
    port: u16,
}

impl Application {
    pub async fn new(context: AlarmContext) -> Result<Self, std::io::Error> {
        let poller = web::Data::new(AlarmPoller::new(context.clone()));
        let (server, port) = Application::configure_server(context.clone(), poller.clone())?;
        Application::start_job_schedulers(context, &poller).await;

        Ok(Self { server, port })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Signs in with the session token from the environment, if any, which
    /// starts the alarm poller
    async fn start_job_schedulers(context: AlarmContext, poller: &AlarmPoller) {
        let token = match &context.config.session_token {
            Some(token) => token.clone(),
            None => return,
        };

        match execute(SignInUseCase { token }, &context).await {
            Ok(_) => {
                poller.start();
            }
            Err(_) => warn!("The SESSION_TOKEN is not valid, waiting for a sign in"),
        }
    }

    fn configure_server(
        context: AlarmContext,
        poller: web::Data<AlarmPoller>,
    ) -> Result<(Server, u16), std::io::Error> {
        let port = context.config.port;
        let address = format!("0.0.0.0:{}", port);
        let listener = TcpListener::bind(&address)?;
        let port = listener.local_addr()?.port();
        let context = web::Data::new(context);

        let server = HttpServer::new(move || {
            App::new()
                .wrap(Cors::permissive())
                .wrap(middleware::Compress::default())
                .wrap(TracingLogger::default())
                .app_data(context.clone())
                .app_data(poller.clone())
                .service(web::scope("/api/v1").configure(configure_server_api))
        })
        .listen(listener)?
        .workers(4)
        .run();

        Ok((server, port))
    }

    pub async fn start(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

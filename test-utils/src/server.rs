use std::path::Path;
use figment::Figment;
use log::error;
use notepad::config::figment::FigmentExt;
use notepad::server::build_rocket;
use rocket::fairing::AdHoc;
use rocket::Shutdown;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use crate::mock::SERVER_CONFIG_FILE;
use crate::ports::free_local_port;

/// `notepadd` running in-process on a local port.
pub struct TestServer {
    port: u16,
    shutdown: Shutdown,
    task: Option<JoinHandle<()>>,
}

impl TestServer {
    /// `root` is a directory prepared by [crate::setup_server_config].
    pub async fn launch(root: &Path) -> TestServer {
        Self::launch_at(root, free_local_port()).await
    }

    pub async fn launch_at(root: &Path, port: u16) -> TestServer {
        let figment = Figment::from(rocket::Config::default())
            .setup_app_config(root.join(SERVER_CONFIG_FILE))
            .merge(("address", "127.0.0.1"))
            .merge(("port", port))
            .merge(("log_level", "off"))
            .merge(("shutdown.ctrlc", false))
            .merge(("shutdown.grace", 0))
            .merge(("shutdown.mercy", 0));

        let (ready_sender, ready_receiver) = oneshot::channel();
        let rocket = build_rocket(figment)
            .attach(AdHoc::on_liftoff("test server ready", move |_| Box::pin(async move {
                let _ = ready_sender.send(());
            })))
            .ignite()
            .await
            .expect("test server failed to ignite");
        let shutdown = rocket.shutdown();
        let task = tokio::spawn(async move {
            if let Err(e) = rocket.launch().await {
                error!("test server failed: {e}");
            }
        });
        ready_receiver.await.expect("test server failed to launch");

        TestServer { port, shutdown, task: Some(task) }
    }

    pub fn base_url(&self) -> String {
        format!("http://127.0.0.1:{}/", self.port)
    }

    /// Returns once the port is released.
    pub async fn stop(mut self) {
        self.shutdown.clone().notify();
        if let Some(task) = self.task.take() {
            task.await.expect("test server task panicked");
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.clone().notify();
    }
}

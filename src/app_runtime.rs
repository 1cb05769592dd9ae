use tauri::Manager;

use crate::{
    append_desktop_log, append_startup_log,
    lifecycle::{LifecycleEvent, LifecycleEvents},
    logging,
    main_window::{MainShell, TauriWindowHost},
    runtime_paths, shell_manifest, DESKTOP_LOG_FILE,
};

pub(crate) fn run() {
    append_startup_log("desktop shell starting");
    append_startup_log(&format!(
        "desktop log path: {}",
        logging::resolve_desktop_log_path(
            runtime_paths::default_packaged_root_dir(),
            DESKTOP_LOG_FILE,
        )
        .display()
    ));

    let program_dir = match runtime_paths::program_dir() {
        Ok(dir) => dir,
        Err(error) => {
            append_startup_log(&format!("desktop shell startup failed: {error}"));
            std::process::exit(1);
        }
    };
    let manifest = shell_manifest::load_shell_manifest(&program_dir);

    let app = match tauri::Builder::default()
        .manage(MainShell::new(program_dir))
        .build(tauri::generate_context!())
    {
        Ok(app) => app,
        Err(error) => {
            append_startup_log(&format!("error while building tauri application: {error}"));
            std::process::exit(1);
        }
    };

    let mut lifecycle = LifecycleEvents::default();
    let app_handle = app.handle().clone();
    lifecycle.on_ready(move || {
        let shell = app_handle.state::<MainShell>();
        append_startup_log(&format!(
            "runtime ready: state={:?} program_dir={}",
            shell.state(),
            shell.program_dir().display()
        ));
        let host = TauriWindowHost::new(&app_handle, &manifest);
        match shell.on_ready(&host) {
            Ok(window) => append_startup_log(&format!("main window ready: {}", window.label())),
            Err(error) => {
                append_startup_log(&format!(
                    "desktop shell startup failed ({:?}): {error}",
                    error.kind()
                ));
                app_handle.exit(1);
            }
        }
    });
    lifecycle.on_exit(|| append_desktop_log("desktop shell exiting"));

    app.run(move |app_handle, event| {
        let Some(lifecycle_event) = LifecycleEvent::from_run_event(&event) else {
            return;
        };
        if lifecycle_event == LifecycleEvent::Ready && lifecycle.has_fired(lifecycle_event) {
            let shell = app_handle.state::<MainShell>();
            let label = shell
                .main_window()
                .map(|window| window.label().to_string())
                .unwrap_or_else(|| "none".to_string());
            append_desktop_log(&format!(
                "ready signalled again; ignoring (main window: {label})"
            ));
        }
        lifecycle.dispatch(lifecycle_event);
    });
}

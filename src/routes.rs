use crate::{
    api::{department, employee, ranking},
    config::Config,
    error::{json_config, path_config},
};
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig, config: &Config) {
    cfg.service(
        web::scope(&config.api_prefix)
            .app_data(json_config())
            .app_data(path_config())
            .service(
                web::scope("/employees")
                    // /employees
                    .service(
                        web::resource("")
                            .route(web::get().to(employee::list_employees))
                            .route(web::post().to(employee::create_employee)),
                    )
                    // /employees/{id}
                    .service(
                        web::resource("/{id}")
                            .route(web::get().to(employee::get_employee))
                            .route(web::put().to(employee::update_employee))
                            .route(web::delete().to(employee::delete_employee)),
                    ),
            )
            .service(
                web::scope("/departments")
                    // /departments
                    .service(web::resource("").route(web::get().to(department::list_departments)))
                    // /departments/{name}
                    .service(
                        web::resource("/{name}")
                            .route(web::get().to(department::list_department_employees)),
                    ),
            )
            .service(
                web::resource("/average_salary/{department}")
                    .route(web::get().to(department::average_salary)),
            )
            .service(web::resource("/top_earners").route(web::get().to(ranking::top_earners)))
            .service(
                web::resource("/most_recent_hires")
                    .route(web::get().to(ranking::most_recent_hires)),
            ),
    );
}

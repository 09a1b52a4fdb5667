use aula_core::client::request::create_client;
use aula_core::config::ApiConfig;
use aula_core::error::{ErrorKind, Result};
use aula_core::model::{CourseQuery, Page};
use aula_core::store::AppState;
use serde_json::Value;

const USAGE: &str = "用法: aula <命令> [参数]

  estudiantes                              列出学生
  estudiante <id>                          查看单个学生
  cursos [nivel] [gestion]                 列出课程，可按级别/学期筛选
  curso <id>                               查看单个课程
  curso-estudiantes <id_curso>             课程中的学生
  curso-habilitados <id_curso>             课程中可选的学生
  estudiante-cursos <id_estudiante>        学生所选课程
  asignar <id_estudiante> <id_curso>       将学生加入课程
  desasignar <id_estudiante> <id_curso>    将学生移出课程
  asignar-masivo <id_curso> <id>...        批量加入课程

后端地址: $AULA_API_BASE_URL（默认 http://localhost:8000/api）";

fn parse_id(arg: Option<&String>, name: &str) -> Result<i64> {
    let raw = arg.ok_or_else(|| ErrorKind::ConfigError(format!("缺少参数 <{name}>")))?;
    raw.parse::<i64>()
        .map_err(|e| ErrorKind::ConfigError(format!("参数 <{name}> 无效 {raw:?}: {e}")).into())
}

fn print_json(value: &impl serde::Serialize) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        println!("{USAGE}");
        return;
    }

    if let Err(e) = run(&args[1], &args[2..]).await {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

async fn run(command: &str, rest: &[String]) -> Result<()> {
    let api = create_client(ApiConfig::from_env()?)?;
    let state = AppState::start_session();

    match command {
        "estudiantes" => {
            state.estudiantes.begin();
            match api.estudiantes().list(Page::default()).await {
                Ok(items) => state.estudiantes.finish_items(items),
                Err(e) => {
                    state.estudiantes.fail(&e);
                    return Err(e);
                }
            }
            print_json(&state.estudiantes.items.get())
        }
        "estudiante" => print_json(&api.estudiantes().get(parse_id(rest.first(), "id")?).await?),
        "cursos" => {
            let mut query = CourseQuery::new();
            if let Some(nivel) = rest.first() {
                query = query.nivel(nivel.as_str());
            }
            if let Some(gestion) = rest.get(1) {
                query = query.gestion(gestion.as_str());
            }
            state.cursos.begin();
            match api.cursos().list(&query).await {
                Ok(items) => state.cursos.finish_items(items),
                Err(e) => {
                    state.cursos.fail(&e);
                    return Err(e);
                }
            }
            print_json(&state.cursos.items.get())
        }
        "curso" => print_json(&api.cursos().get(parse_id(rest.first(), "id")?).await?),
        "curso-estudiantes" => {
            let id_curso = parse_id(rest.first(), "id_curso")?;
            print_json(&api.asignaciones().students_of_course(id_curso).await?)
        }
        "curso-habilitados" => {
            let id_curso = parse_id(rest.first(), "id_curso")?;
            print_json(&api.asignaciones().eligible_students_of_course(id_curso).await?)
        }
        "estudiante-cursos" => {
            let id_estudiante = parse_id(rest.first(), "id_estudiante")?;
            print_json(&api.asignaciones().courses_of_student(id_estudiante).await?)
        }
        "asignar" => {
            let id_estudiante = parse_id(rest.first(), "id_estudiante")?;
            let id_curso = parse_id(rest.get(1), "id_curso")?;
            print_json(&api.asignaciones().assign(id_estudiante, id_curso).await?)
        }
        "desasignar" => {
            let id_estudiante = parse_id(rest.first(), "id_estudiante")?;
            let id_curso = parse_id(rest.get(1), "id_curso")?;
            print_json(&api.asignaciones().unassign(id_estudiante, id_curso).await?)
        }
        "asignar-masivo" => {
            let id_curso = parse_id(rest.first(), "id_curso")?;
            let ids = rest[1..]
                .iter()
                .map(|raw| parse_id(Some(raw), "id_estudiante"))
                .collect::<Result<Vec<_>>>()?;
            let resp: Value = api.asignaciones().assign_bulk(id_curso, &ids).await?;
            print_json(&resp)
        }
        _ => {
            println!("{USAGE}");
            Ok(())
        }
    }
}

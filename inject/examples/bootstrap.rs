use fibre_inject::{
  global, inject, install_global, register_service, Container, Error, MetadataTable,
  ResolvedParam, TypeDescriptor,
};

struct Database;
struct UserRepository;
struct UserService;

fn describe(params: &[ResolvedParam]) {
  for (index, param) in params.iter().enumerate() {
    match param {
      ResolvedParam::Injector(injector) => println!("  [{}] inject `{}`", index, injector.key()),
      ResolvedParam::Metadata(descriptor) => {
        println!("  [{}] resolve {:?}", index, descriptor.name().unwrap_or("?"))
      }
    }
  }
}

fn main() -> Result<(), Error> {
  // --- Bootstrap Phase ---
  // Signatures captured ahead of time, one entry per constructor or method.
  let metadata = MetadataTable::builder()
    .constructor::<Database>([TypeDescriptor::named("String")])
    .constructor::<UserRepository>([TypeDescriptor::of::<Database>()])
    .constructor::<UserService>([
      TypeDescriptor::of::<UserRepository>(),
      TypeDescriptor::named("Number"),
    ])
    .method::<UserService>("find", [TypeDescriptor::named("String")])
    .build();

  let container = install_global(Container::new(metadata))?;

  // Injectors may be declared before their class is registered.
  inject!(container, Database, 0 => "database_url")?;
  inject!(container, UserService, 1 => "page_size")?;
  inject!(container, UserService::find, 0 => "default_user")?;

  register_service!(container, Database, global = true);
  register_service!(container, UserRepository);
  register_service!(container, UserService);

  // --- Resolution Phase ---
  for (name, params) in [
    ("Database", global()?.get::<Database>()?),
    ("UserRepository", global()?.get::<UserRepository>()?),
    ("UserService", global()?.get::<UserService>()?),
    ("UserService::find", global()?.get_method::<UserService>("find")?),
  ] {
    println!("{}:", name);
    describe(&params);
  }

  // A slot can only be declared once.
  match inject!(container, UserService, 1 => "another_page_size") {
    Err(err) => println!("\nRejected as expected: {}", err),
    Ok(()) => panic!("duplicate injector was accepted"),
  }

  Ok(())
}

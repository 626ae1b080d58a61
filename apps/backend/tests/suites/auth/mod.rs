mod gate;
mod login;
mod logout;
mod signup;

fn main() {
    leavedesk_frontend::run();
}
